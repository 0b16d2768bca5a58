/// A high-level action the demo responds to.
///
/// The windowed app maps key events to actions; headless frontends can feed
/// actions directly. Keeping the enum windowing-free means the app logic can
/// be exercised without a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Switch between the camera view and the shadow-map view.
    ToggleOverlay,
    /// Show or hide the on-screen inspector panel.
    ToggleHud,
    /// No-op (used for input that hasn't been bound).
    Noop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_overlay_is_constructible() {
        let a = Action::ToggleOverlay;
        assert!(matches!(a, Action::ToggleOverlay));
    }

    #[test]
    fn actions_compare() {
        assert_eq!(Action::ToggleHud, Action::ToggleHud);
        assert_ne!(Action::ToggleHud, Action::Noop);
    }
}
