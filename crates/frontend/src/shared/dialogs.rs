/// Show a blocking browser alert. Logs instead when no window is available.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(w) => {
            if w.alert_with_message(message).is_err() {
                log::warn!("alert failed: {}", message);
            }
        }
        None => log::warn!("no window for alert: {}", message),
    }
}
