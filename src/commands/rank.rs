use std::io::{self, BufWriter, Write};

use crate::{job::Job, options::RankOptions};

pub fn rank(options: RankOptions) -> anyhow::Result<()> {
    let job = Job::read_from_file(&options.job)?;
    let rectangles = job.rectangles()?;

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());

    for entry in packsearch::rank(&rectangles, options.heuristic) {
        let (width, height) = entry.rectangle.size();

        writeln!(
            output,
            "{}\t{}x{}\t{}",
            entry.key,
            width,
            height,
            job.name_of(&entry.rectangle)
        )?;
    }

    output.flush()?;

    Ok(())
}
