use std::io::{self, BufWriter, Write};

use anyhow::format_err;
use fs_err as fs;
use packsearch::{AnchorPacker, HeuristicSelector, PackingResult, Rectangle};
use serde::Serialize;

use crate::{job::Job, options::PackOptions};

pub fn pack(options: PackOptions) -> anyhow::Result<()> {
    let job = Job::read_from_file(&options.job)?;
    let rectangles = job.rectangles()?;

    // Heuristics given on the command line replace the job's list.
    let selector: HeuristicSelector = if options.heuristics.is_empty() {
        job.selector()
    } else {
        options.heuristics.iter().copied().collect()
    };

    let engine = AnchorPacker::new()
        .min_size(job.min_size)
        .max_size(job.max_size);

    let result = if options.parallel {
        packsearch::pack_parallel(&rectangles, selector, &engine)?
    } else {
        packsearch::pack(&rectangles, selector, &engine)?
    };

    for (heuristic, err) in result.skipped() {
        log::warn!("Heuristic {} could not pack this job: {}", heuristic, err);
    }

    log::info!(
        "Packed {} rects from {} with heuristic {} into {}x{} ({:.1}% occupied)",
        rectangles.len(),
        job.file_path.display(),
        result.heuristic(),
        result.bounding_size().0,
        result.bounding_size().1,
        result.occupancy() * 100.0
    );

    let report = PackReport::new(&job, &rectangles, &result)?;

    match &options.output {
        Some(path) => {
            let mut file = BufWriter::new(fs::File::create(path)?);
            serde_json::to_writer_pretty(&mut file, &report)?;
            file.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &report)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct PackReport<'a> {
    heuristic: &'static str,
    bin_size: (u32, u32),
    bounding_size: (u64, u64),
    bounding_area: u64,
    occupancy: f64,
    trials: Vec<TrialReport>,
    rects: Vec<RectReport<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct TrialReport {
    heuristic: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    bounding_area: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct RectReport<'a> {
    name: &'a str,
    position: (u32, u32),
    size: (u32, u32),
}

impl<'a> PackReport<'a> {
    fn new(
        job: &'a Job,
        rectangles: &[Rectangle],
        result: &PackingResult,
    ) -> anyhow::Result<Self> {
        let trials = result
            .trials()
            .iter()
            .map(|trial| TrialReport {
                heuristic: trial.heuristic.name(),
                bounding_area: trial.outcome.as_ref().ok().copied(),
                error: trial.outcome.as_ref().err().map(ToString::to_string),
            })
            .collect();

        // Rects are listed in the same order as in the job file.
        let rects = rectangles
            .iter()
            .map(|rectangle| {
                let name = job.name_of(rectangle);
                let position = result
                    .position_of(rectangle.id())
                    .ok_or_else(|| format_err!("Rect '{}' was not placed", name))?;

                Ok(RectReport {
                    name,
                    position,
                    size: rectangle.size(),
                })
            })
            .collect::<anyhow::Result<_>>()?;

        Ok(Self {
            heuristic: result.heuristic().name(),
            bin_size: result.placement().bin_size(),
            bounding_size: result.bounding_size(),
            bounding_area: result.bounding_area(),
            occupancy: result.occupancy(),
            trials,
            rects,
        })
    }
}
