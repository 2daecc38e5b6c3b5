//! Annotate an image with face outlines from a remote detection endpoint.
//!
//! Usage:
//!   cargo run --example annotate --features remote -- photo.jpg http://localhost:8080/detect

use face_overlay::{FaceAnnotator, RemoteDetector};

fn main() {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let (input_path, endpoint) = match (args.next(), args.next()) {
        (Some(path), Some(endpoint)) => (path, endpoint),
        _ => {
            eprintln!("usage: annotate <image> <detection-endpoint>");
            std::process::exit(2);
        }
    };

    let input = std::fs::read(&input_path).expect("failed to read input image");

    let result = FaceAnnotator::new(input)
        .expect("invalid input image")
        .detector(Box::new(RemoteDetector::new(endpoint)))
        .annotate()
        .expect("annotation failed");

    println!("{}", result.report());

    let output = result.encode_png().expect("failed to encode output");
    std::fs::write("annotated.png", &output).expect("failed to write annotated.png");
    println!("wrote annotated.png ({} bytes)", output.len());
}
