pub mod board;
pub mod gameplay;
pub mod players;

/// a player's triangle count
pub type Score = u16;

/// minimum separation between any two generated stars
pub const MIN_DISTANCE: f64 = 40.0;
/// perpendicular distance under which a segment is treated as running through a star
pub const POINT_TOLERANCE: f64 = 10.0;
/// default margin kept between stars and the board edge
pub const PADDING: f64 = 20.0;
/// faces on the turn die
pub const DIE_SIDES: u8 = 6;
/// rejection sampling budget per requested star
pub const SCATTER_ATTEMPTS: usize = 100;

/// Initialize terminal logging for the interactive binary.
#[cfg(feature = "cli")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
