//! Fixture commands and the queue that carries them
//!
//! Interrupt handlers or other tasks push [`FixtureCommand`]s into a
//! [`CommandChannel`]; the fixture owner drains it from its control loop with
//! [`Fixture::process_commands`](crate::Fixture::process_commands). The
//! channel is a fixed-size `heapless::Deque` guarded by a critical section.

use core::cell::RefCell;
use core::fmt;

use critical_section::Mutex;
use heapless::Deque;

use crate::color::Rgb10;
use crate::sweep::SweepConfig;

/// A change requested on the fixture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FixtureCommand {
    /// Set 10-bit RGB levels
    SetRgb(Rgb10),
    /// Set an 8-bit hue at a 10-bit value
    SetHueValue { hue: u8, value: u16 },
    /// Store a hue and apply it at the stored intensity
    SetHue(u8),
    /// Store an intensity and apply it at the stored hue
    SetIntensity(u16),
    AllOff,
    SetGamma(bool),
    ConfigureSweep(SweepConfig),
    EnableSweep(bool),
    ResetSweep,
}

/// Returned when the channel is full, carries the rejected command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrySendError(pub FixtureCommand);

impl fmt::Display for TrySendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "command channel is full, dropped {:?}", self.0)
    }
}

/// Returned when the channel is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

impl fmt::Display for TryReceiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("command channel is empty")
    }
}

/// Bounded command queue shared between producers and the fixture owner
pub struct CommandChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<FixtureCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { channel: self }
    }

    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    /// Queue a command, fails if the channel is full
    pub fn try_send(&self, command: FixtureCommand) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(TrySendError)
        })
    }

    /// Take the oldest command, fails if the channel is empty
    pub fn try_receive(&self) -> Result<FixtureCommand, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of queued commands
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle of a [`CommandChannel`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn try_send(&self, command: FixtureCommand) -> Result<(), TrySendError> {
        self.channel.try_send(command)
    }
}

/// Consumer handle of a [`CommandChannel`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<FixtureCommand, TryReceiveError> {
        self.channel.try_receive()
    }
}
