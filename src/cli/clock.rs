use crate::{
    info,
    management::{Clock, SystemTime},
    warning,
};

/// Prints the `HH:MM` clock whenever it changes, until Ctrl-C.
pub async fn clock() {
    let (mut handle, mut display) = Clock::start_with_channel(SystemTime);
    let mut shown = String::new();

    loop {
        let current = display.borrow_and_update().clone();
        if current != shown {
            info!("{}", current);
            shown = current;
        }

        tokio::select! {
            changed = display.changed() => {
                if changed.is_err() {
                    warning!("Clock stopped unexpectedly.");
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    handle.stop().await;
}
