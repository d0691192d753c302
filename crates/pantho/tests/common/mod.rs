use pantho_lib::{App, Message};

/// Sends `clicks` [`Message::Click`]s to `app`.
#[allow(dead_code)]
pub fn click(app: &mut App, clicks: u64) {
    for _ in 0..clicks {
        let _ = app.update(Message::Click);
    }
}

/// Closes the window of `app`.
#[allow(dead_code)]
pub fn close(app: &mut App) {
    let _ = app.update(Message::CloseRequested);
}
