//! Door and indicator state owned by the controller.

/// Gate position as last commanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorState {
    #[default]
    Closed,
    Open,
}

impl DoorState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Full-garage indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightState {
    #[default]
    Off,
    On,
}

impl LightState {
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

impl From<bool> for LightState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}
