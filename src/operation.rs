use enumn::N;

/// The closed set of camera operations, keyed by the wire operation code.
///
/// Codes outside 0..=11 have no variant; `Operation::n` returns `None` for
/// them, including negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, N)]
pub enum Operation {
    ZoomIn = 0,
    ZoomOut = 1,
    PtzUp = 2,
    PtzDown = 3,
    PtzLeft = 4,
    PtzRight = 5,
    FiOut = 6,
    FiIn = 7,
    FiNear = 8,
    FiFar = 9,
    StopPtz = 10,
    StopFi = 11,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Ptz,
    Fi,
    StopPtz,
    StopFi,
}

/// Which frame field a motion or optical operation drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
    Zoom,
    Focus,
    Iris,
}

impl Operation {
    pub fn category(self) -> Category {
        match self {
            Self::ZoomIn
            | Self::ZoomOut
            | Self::PtzUp
            | Self::PtzDown
            | Self::PtzLeft
            | Self::PtzRight => Category::Ptz,
            Self::FiOut | Self::FiIn | Self::FiNear | Self::FiFar => Category::Fi,
            Self::StopPtz => Category::StopPtz,
            Self::StopFi => Category::StopFi,
        }
    }

    /// Stop operations carry no axis.
    pub fn axis(self) -> Option<Axis> {
        Some(match self {
            Self::ZoomIn | Self::ZoomOut => Axis::Zoom,
            Self::PtzUp | Self::PtzDown => Axis::Vertical,
            Self::PtzLeft | Self::PtzRight => Axis::Horizontal,
            Self::FiOut | Self::FiIn => Axis::Focus,
            Self::FiNear | Self::FiFar => Axis::Iris,
            Self::StopPtz | Self::StopFi => return None,
        })
    }

    /// Value of frame byte 3: a single select bit for PTZ directions,
    /// `0x40 | bit` for focus/iris, and the fixed stop markers.
    ///
    /// An explicit table rather than bit math over the operation code, so
    /// reordering the enum cannot silently change the wire encoding.
    pub fn select_byte(self) -> u8 {
        match self {
            Self::ZoomIn => 0x20,
            Self::ZoomOut => 0x10,
            Self::PtzUp => 0x08,
            Self::PtzDown => 0x04,
            Self::PtzLeft => 0x02,
            Self::PtzRight => 0x01,
            Self::FiOut => 0x48,
            Self::FiIn => 0x44,
            Self::FiNear => 0x42,
            Self::FiFar => 0x41,
            Self::StopPtz => 0x00,
            Self::StopFi => 0x40,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const PTZ_CODES: [i64; 6] = [0, 1, 2, 3, 4, 5];
    const FI_CODES: [i64; 4] = [6, 7, 8, 9];

    #[test]
    fn codes_outside_the_set_have_no_operation() {
        for code in [-1, 12, 13, 255, i64::MIN, i64::MAX] {
            assert_eq!(None, Operation::n(code));
        }
    }

    #[test]
    fn every_code_classifies_into_one_category() {
        for code in PTZ_CODES {
            assert_eq!(Category::Ptz, Operation::n(code).unwrap().category());
        }
        for code in FI_CODES {
            assert_eq!(Category::Fi, Operation::n(code).unwrap().category());
        }
        assert_eq!(Category::StopPtz, Operation::n(10).unwrap().category());
        assert_eq!(Category::StopFi, Operation::n(11).unwrap().category());
    }

    #[test]
    fn axis_pairs() {
        assert_eq!(Some(Axis::Zoom), Operation::ZoomIn.axis());
        assert_eq!(Some(Axis::Zoom), Operation::ZoomOut.axis());
        assert_eq!(Some(Axis::Vertical), Operation::PtzUp.axis());
        assert_eq!(Some(Axis::Vertical), Operation::PtzDown.axis());
        assert_eq!(Some(Axis::Horizontal), Operation::PtzLeft.axis());
        assert_eq!(Some(Axis::Horizontal), Operation::PtzRight.axis());
        assert_eq!(Some(Axis::Focus), Operation::FiOut.axis());
        assert_eq!(Some(Axis::Focus), Operation::FiIn.axis());
        assert_eq!(Some(Axis::Iris), Operation::FiNear.axis());
        assert_eq!(Some(Axis::Iris), Operation::FiFar.axis());
        assert_eq!(None, Operation::StopPtz.axis());
        assert_eq!(None, Operation::StopFi.axis());
    }

    #[test]
    fn ptz_select_bytes_are_distinct_single_bits() {
        let bytes: Vec<u8> = PTZ_CODES
            .into_iter()
            .map(|code| Operation::n(code).unwrap().select_byte())
            .collect();

        assert_eq!(vec![0x20, 0x10, 0x08, 0x04, 0x02, 0x01], bytes);
        for byte in bytes {
            assert_eq!(1, byte.count_ones());
        }
    }

    #[test]
    fn fi_select_bytes() {
        let bytes: Vec<u8> = FI_CODES
            .into_iter()
            .map(|code| Operation::n(code).unwrap().select_byte())
            .collect();

        assert_eq!(vec![0x48, 0x44, 0x42, 0x41], bytes);
    }
}
