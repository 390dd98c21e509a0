use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a rectangle of size `size` (clamped to `area`) centered inside
/// `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}
