pub fn init_simple_logger(l: log::LevelFilter) -> Result<(), log::SetLoggerError> { 
    use simplelog::*;

    let mut cb = simplelog::ConfigBuilder::new();
    cb.set_location_level(LevelFilter::Off);
    cb.set_target_level(LevelFilter::Off);
    cb.set_thread_level(LevelFilter::Off);
    cb.set_level_color(Level::Trace, Some(Color::Green));
    let config = cb.build();

    TermLogger::init(
        l,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto
    )
}

pub fn level_from_verbosity(v: u8) -> log::LevelFilter { 
    use log::LevelFilter::*;
    match v {
        0 => Off,
        1 => Info,
        2 => Debug,
        _ => Trace,
    }
}

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn verbosity() { 
        assert_eq!(level_from_verbosity(0), log::LevelFilter::Off);
        assert_eq!(level_from_verbosity(2), log::LevelFilter::Debug);
        assert_eq!(level_from_verbosity(9), log::LevelFilter::Trace);
    }
}
