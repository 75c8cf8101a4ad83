//! hand_drive — interactive entry point.

use hand_drive::app::run;
use hand_drive::config::AppConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║        Hand Drive — webcam gesture game controller           ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    #[cfg(feature = "camera")]
    println!("  Mode: webcam + MediaPipe hand landmarks");
    #[cfg(not(feature = "camera"))]
    println!("  Mode: keyboard simulation  (use --features camera for a webcam)");
    println!();
    println!("  Open hand = gas   Closed fist = brake   Other = neutral");
    println!("  Press Q in the preview window to quit, I for instructions.");
    println!();

    if let Err(e) = run(AppConfig::default()) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
