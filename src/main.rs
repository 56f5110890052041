use std::env;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    // --- 1. Argument Parsing & Setup ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        println!("Usage: crewmate_vision <input_image_path> <output_image_path>");
        return ExitCode::FAILURE;
    }
    let input = Path::new(&args[1]);
    let output = Path::new(&args[2]);

    // --- 2. Detection & Compositing ---
    match crewmate_vision::pipeline::run(input, output) {
        Ok(found) => {
            println!("found {found} crewmates");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("detection failed: {err}");
            ExitCode::FAILURE
        }
    }
}
