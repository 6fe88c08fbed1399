use packsearch::{pack, AnchorPacker, HeuristicSelector, Rectangle};

fn main() {
    env_logger::init();

    let inputs: Vec<_> = (0..5)
        .map(|_| Rectangle::new((128, 128)))
        .collect::<Result<_, _>>()
        .expect("128x128 is a valid rectangle size");

    let packer = AnchorPacker::new().max_size((512, 512));
    let result = pack(&inputs, HeuristicSelector::ALL, &packer);

    println!("Pack result: {:#?}", result);
}
