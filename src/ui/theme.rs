use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub directory: Color,
    pub file: Color,
    pub special: Color, // Devices, sockets, broken links
    pub border_focused: Color,
    pub border_normal: Color,
    pub title_fg: Color,
    pub label: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::White,
    directory: Color::Blue,
    file: Color::White,
    special: Color::DarkGray,
    border_focused: Color::Yellow, // Yellow border for focus
    border_normal: Color::White,
    title_fg: Color::Blue,
    label: Color::Cyan,
};
