use crate::consts;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Center a `consts::DISPLAY_SIZE`-sized rectangle within `buffer_area`.
/// Everything the program draws is laid out inside this rectangle.
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    let [display] = Layout::horizontal([consts::DISPLAY_SIZE.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [display] = Layout::vertical([consts::DISPLAY_SIZE.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

/// Center a `size`-sized rectangle within `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height]).flex(Flex::Center).areas(rect);
    rect
}

/// Navigation helpers for fieldless enums used as menu rows
pub(crate) trait EnumExt: Enum + Copy {
    fn min() -> Self {
        Self::from_usize(0)
    }

    fn max() -> Self {
        Self::from_usize(Self::LENGTH - 1)
    }

    fn prev(self) -> Option<Self> {
        self.into_usize().checked_sub(1).map(Self::from_usize)
    }

    fn next(self) -> Option<Self> {
        let i = self.into_usize() + 1;
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }

    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }
}

impl<T: Enum + Copy> EnumExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
    enum Tri {
        A,
        B,
        C,
    }

    #[test]
    fn enum_ext_endpoints() {
        assert_eq!(Tri::min(), Tri::A);
        assert_eq!(Tri::max(), Tri::C);
        assert_eq!(Tri::A.prev(), None);
        assert_eq!(Tri::C.next(), None);
        assert_eq!(Tri::B.prev(), Some(Tri::A));
        assert_eq!(Tri::B.next(), Some(Tri::C));
    }

    #[test]
    fn enum_ext_iter() {
        assert_eq!(Tri::iter().collect::<Vec<_>>(), [Tri::A, Tri::B, Tri::C]);
    }

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(28, 22), Rect::new(26, 1, 28, 22))]
    #[case(Rect::new(0, 0, 100, 30), Size::new(10, 10), Rect::new(45, 10, 10, 10))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] expected: Rect) {
        assert_eq!(center_rect(area, size), expected);
    }

    #[test]
    fn display_area_centered() {
        let display = get_display_area(Rect::new(0, 0, 100, 30));
        assert_eq!(display, Rect::new(10, 3, 80, 24));
    }
}
