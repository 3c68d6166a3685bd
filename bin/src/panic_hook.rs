use std::io::stdout;

use ratatui::crossterm::{execute, terminal::disable_raw_mode, terminal::LeaveAlternateScreen};

/// Restores the terminal before printing the panic so the message is readable.
pub fn set() {
    std::panic::set_hook(Box::new(|info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);

        let msg = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            info.to_string()
        };

        if let Some(loc) = info.location() {
            eprintln!("Panic: {msg:?} at {}:{}", loc.file(), loc.line());
        } else {
            eprintln!("Panic: {msg:?}");
        }

        tracing::error!("panic: {msg}");
    }));
}
