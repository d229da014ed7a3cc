/// Port for short user-facing notices (the toast of a graphical surface).
pub trait Notifier {
    fn notify(&self, message: &str);
}
