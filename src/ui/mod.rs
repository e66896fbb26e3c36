//! User interface subsystem - 1602 character LCD + five-way ladder button.
//!
//! Every screen the panel can show is described by a static
//! [`ScreenDescriptor`]: how to render it into two 16-character lines,
//! how it reacts to a button direction, and whether it is a popup that
//! dismisses itself after a number of ticks.
//!
//! ## Components
//!
//! - **Screen table**: one descriptor per [`ScreenId`], fixed at compile time
//! - **Machine**: current/previous screen and the popup countdown
//! - **Display**: `CharDisplay` trait and an HD44780 4-bit driver
//! - **Buttons** (embedded only): GPIO/SAADC tasks feeding the input latch

#[cfg(feature = "embedded")]
pub mod buttons;
pub mod display;
pub mod input_logic;
pub mod machine;
pub mod screens;


use crate::config::LCD_COLUMNS;

/// One rendered LCD row.
pub type Line = heapless::String<LCD_COLUMNS>;

/// A classified press of the ladder button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    None,
    Up,
    Down,
    Left,
    Right,
    Enter,
}

/// What a button press asks the scheduler to do with the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenAction {
    NoOp,
    GoToPreviousScreen,
    GoToScreen(ScreenId),
}

/// Screens (views) the UI can be in.
///
/// The discriminant is the index into [`SCREENS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ScreenId {
    /// Splash / idle screen shown at power-up.
    Start = 0,
    /// Menu entry leading to the volume popup.
    VolumeMenu,
    /// Menu entry leading to the uptime clock.
    UptimeMenu,
    /// Menu entry leading to the firmware info.
    AboutMenu,
    /// Volume bar, shown as a popup on every encoder step.
    Volume,
    /// Time since power-up.
    Uptime,
    /// Firmware name and version.
    About,
}

impl ScreenId {
    pub const START: ScreenId = ScreenId::Start;
    pub const COUNT: usize = 7;

    /// Entries of the main menu, in Up/Down order.
    pub const MENU: [ScreenId; 3] = [ScreenId::VolumeMenu, ScreenId::UptimeMenu, ScreenId::AboutMenu];

    pub const ALL: [ScreenId; Self::COUNT] = [
        ScreenId::Start,
        ScreenId::VolumeMenu,
        ScreenId::UptimeMenu,
        ScreenId::AboutMenu,
        ScreenId::Volume,
        ScreenId::Uptime,
        ScreenId::About,
    ];

    pub fn descriptor(self) -> &'static ScreenDescriptor {
        &SCREENS[self as usize]
    }

    /// Popups dismiss themselves; everything else is a base screen.
    pub fn is_popup(self) -> bool {
        self.descriptor().popup_time != 0
    }
}

/// Values a screen may show, captured once per redraw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderInput {
    /// Frame counter passed to `tick`.
    pub frame: u32,
    /// Current volume step.
    pub volume: u8,
}

/// Renders a screen into its two rows.
pub type RenderFn = fn(&RenderInput, &mut Line, &mut Line);

/// Maps a button direction to a navigation request.
pub type ButtonFn = fn(Direction) -> ScreenAction;

/// Static behaviour of one screen.
pub struct ScreenDescriptor {
    pub id: ScreenId,
    pub render: RenderFn,
    pub on_button: ButtonFn,
    /// Ticks before a popup reverts to the previous screen; 0 = base screen.
    pub popup_time: u16,
}

impl ScreenDescriptor {
    pub fn render(&self, input: &RenderInput, first: &mut Line, second: &mut Line) {
        first.clear();
        second.clear();
        (self.render)(input, first, second);
    }

    pub fn handle_button(&self, direction: Direction) -> ScreenAction {
        (self.on_button)(direction)
    }
}

/// The screen table, indexed by `ScreenId as usize`.
pub static SCREENS: [ScreenDescriptor; ScreenId::COUNT] = [
    ScreenDescriptor {
        id: ScreenId::Start,
        render: screens::start::render,
        on_button: screens::start::on_button,
        popup_time: 0,
    },
    ScreenDescriptor {
        id: ScreenId::VolumeMenu,
        render: screens::menu::render_volume,
        on_button: screens::menu::on_button_volume,
        popup_time: 0,
    },
    ScreenDescriptor {
        id: ScreenId::UptimeMenu,
        render: screens::menu::render_uptime,
        on_button: screens::menu::on_button_uptime,
        popup_time: 0,
    },
    ScreenDescriptor {
        id: ScreenId::AboutMenu,
        render: screens::menu::render_about,
        on_button: screens::menu::on_button_about,
        popup_time: 0,
    },
    ScreenDescriptor {
        id: ScreenId::Volume,
        render: screens::volume::render,
        on_button: screens::volume::on_button,
        popup_time: crate::config::VOLUME_POPUP_TICKS,
    },
    ScreenDescriptor {
        id: ScreenId::Uptime,
        render: screens::uptime::render,
        on_button: screens::uptime::on_button,
        popup_time: 0,
    },
    ScreenDescriptor {
        id: ScreenId::About,
        render: screens::about::render,
        on_button: screens::about::on_button,
        popup_time: 0,
    },
];
