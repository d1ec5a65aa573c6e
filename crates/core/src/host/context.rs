/// Host-global UI context flags, e.g. for switching to an empty-state view.
///
/// The tree provider only writes flags; it never reads them back.
pub trait UiContext: Send + Sync {
    fn set_flag(&self, key: &str, value: bool);
}
