use std::time::Duration;

use crosspad_mappings::MappingRecord;
use crosspad_pad::{
    Attach, DeadZone, DeadZoneProfile, Error, JoystickCapabilities,
    JoystickState, PadBackend, PadCapabilities, PadState, Result,
    SlotRegistry,
};
use sdl2::event::Event;
use sdl2::{
    EventPump, GameControllerSubsystem, HapticSubsystem, JoystickSubsystem,
    Sdl,
};

use crate::convert::capabilities_from_mapping;
use crate::device::{probe_rumble, RumbleDriver, SdlDevice};

/// Slot count exposed by this backend.
pub const MAX_PADS: usize = 16;

// Disconnected slots re-scan the device list at most this often.
const PROBE_INTERVAL: Duration = Duration::from_secs(1);

/// SDL-backed implementation of [`PadBackend`].
///
/// Owns the SDL context, so at most one instance should exist per process.
/// Hot-plug events are drained at the top of every poll entry point; there
/// is no background thread and no shared state.
pub struct SdlBackend {
    registry: SlotRegistry<SdlDevice>,
    profile: DeadZoneProfile,
    game_controller: GameControllerSubsystem,
    joystick: JoystickSubsystem,
    haptic: HapticSubsystem,
    event_pump: EventPump,
    _sdl: Sdl,
}

impl SdlBackend {
    pub fn new() -> Result<Self> {
        Self::with_profile(DeadZoneProfile::default())
    }

    /// Build the backend with a specific dead-zone radius profile.
    pub fn with_profile(profile: DeadZoneProfile) -> Result<Self> {
        let sdl = sdl2::init().map_err(Error::BackendInit)?;
        let game_controller = sdl.game_controller().map_err(Error::BackendInit)?;
        let joystick = sdl.joystick().map_err(Error::BackendInit)?;
        let haptic = sdl.haptic().map_err(Error::BackendInit)?;
        let event_pump = sdl.event_pump().map_err(Error::BackendInit)?;

        let mut backend = Self {
            registry: SlotRegistry::with_capacity(MAX_PADS),
            profile,
            game_controller,
            joystick,
            haptic,
            event_pump,
            _sdl: sdl,
        };

        // Devices plugged in before init never fire an added event.
        let present =
            backend.joystick.num_joysticks().map_err(Error::BackendInit)?;
        for index in 0..present {
            backend.add_device(index);
        }
        Ok(backend)
    }

    /// Drain pending SDL events into the registry.
    pub fn pump_events(&mut self) {
        let events: Vec<Event> = self.event_pump.poll_iter().collect();
        for event in events {
            match event {
                Event::JoyDeviceAdded { which, .. } => self.add_device(which),
                Event::JoyDeviceRemoved { which, .. } => {
                    self.remove_device(which);
                }
                _ => {}
            }
        }
    }

    fn add_device(&mut self, device_index: u32) {
        let joystick = match self.joystick.open(device_index) {
            Ok(j) => j,
            Err(e) => {
                log::warn!("failed to open joystick {device_index}: {e}");
                return;
            }
        };
        let handle = joystick.instance_id();
        let descriptor = joystick.guid().string();

        let controller = if self.game_controller.is_game_controller(device_index)
        {
            match self.game_controller.open(device_index) {
                Ok(c) => Some(c),
                Err(e) => {
                    log::warn!(
                        "failed to open controller {device_index}: {e}"
                    );
                    None
                }
            }
        } else {
            None
        };

        let rumble = probe_rumble(&self.haptic, &joystick, controller.as_ref());
        let has_rumble = !matches!(rumble, RumbleDriver::None);

        // Capabilities come from the controller mapping. Plain joysticks
        // have none and stay unknown on the pad surface; they are served
        // through the joystick facade instead.
        let capabilities = controller.as_ref().and_then(|c| {
            match MappingRecord::parse(&c.mapping()) {
                Ok(record) => Some(capabilities_from_mapping(
                    &record,
                    &c.name(),
                    &descriptor,
                    has_rumble,
                )),
                Err(e) => {
                    log::debug!("unusable controller mapping: {e}");
                    None
                }
            }
        });

        let device = SdlDevice::new(rumble, controller, joystick);
        let outcome = self.registry.attach(handle, &descriptor, device);
        match outcome {
            Attach::Duplicate(slot) => {
                log::debug!("device {handle} already bound to slot {slot}");
            }
            Attach::Reconnected(slot) => {
                log::info!("device {descriptor} reconnected to slot {slot}");
            }
            Attach::Fresh(slot) | Attach::Evicted(slot) => {
                log::info!("device {descriptor} attached to slot {slot}");
            }
            Attach::Ignored => {
                log::warn!("no free pad slot for device {descriptor}");
            }
        }

        if let Some(slot) = outcome.slot() {
            if let (Some(caps), Some(entry)) =
                (capabilities, self.registry.get_mut(slot))
            {
                entry.set_capabilities(caps);
            }
        }
    }

    fn remove_device(&mut self, instance_id: u32) {
        if let Some((slot, device)) = self.registry.detach(instance_id) {
            // Dropping releases the haptic handle before the device handles
            drop(device);
            log::info!("device removed from slot {slot}");
        }
    }

    /// Look for a disconnected slot's device among currently present
    /// joysticks and re-open it. Covers replug cycles whose events were
    /// missed while nobody was polling.
    fn probe_disconnected(&mut self, slot: usize) {
        let Some(descriptor) =
            self.registry.get(slot).map(|s| s.descriptor().to_string())
        else {
            return;
        };
        let Ok(present) = self.joystick.num_joysticks() else {
            return;
        };
        for index in 0..present {
            let Ok(joystick) = self.joystick.open(index) else {
                continue;
            };
            let guid = joystick.guid().string();
            drop(joystick);
            if guid == descriptor {
                self.add_device(index);
                return;
            }
        }
    }

    fn slot_is_connected(&self, slot: usize) -> bool {
        self.registry.get(slot).is_some_and(|s| s.is_connected())
    }
}

impl PadBackend for SdlBackend {
    fn max_pads(&self) -> usize {
        MAX_PADS
    }

    fn capabilities(&mut self, slot: usize) -> PadCapabilities {
        self.pump_events();
        let Some(entry) = self.registry.get(slot) else {
            return PadCapabilities::unknown();
        };
        let Some(caps) = entry.capabilities() else {
            return PadCapabilities::unknown();
        };
        let mut caps = caps.clone();
        caps.is_connected = entry.is_connected();
        caps
    }

    fn state(
        &mut self,
        slot: usize,
        left_mode: DeadZone,
        right_mode: DeadZone,
    ) -> PadState {
        self.pump_events();

        if !self.slot_is_connected(slot) {
            if self.registry.should_probe(slot, PROBE_INTERVAL) {
                self.probe_disconnected(slot);
            }
            if !self.slot_is_connected(slot) {
                return PadState::default();
            }
        }

        let attached = self
            .registry
            .get(slot)
            .and_then(|s| s.device())
            .is_some_and(SdlDevice::is_attached);
        if !attached {
            if let Some(device) = self.registry.mark_disconnected(slot) {
                drop(device);
            }
            return PadState::default();
        }

        let profile = self.profile;
        match self.registry.get_mut(slot).and_then(|s| s.device_mut()) {
            Some(device) => device.read_state(profile, left_mode, right_mode),
            None => PadState::default(),
        }
    }

    fn set_vibration(
        &mut self,
        slot: usize,
        left: f32,
        right: f32,
        left_trigger: f32,
        right_trigger: f32,
    ) -> bool {
        self.pump_events();
        match self.registry.get_mut(slot).and_then(|s| s.device_mut()) {
            Some(device) => {
                device.set_vibration(left, right, left_trigger, right_trigger)
            }
            None => false,
        }
    }

    fn joystick_capabilities(&mut self, slot: usize) -> JoystickCapabilities {
        self.pump_events();
        if !self.slot_is_connected(slot) {
            return JoystickCapabilities::default();
        }
        match self.registry.get(slot).and_then(|s| s.device()) {
            Some(device) => device.joystick_capabilities(),
            None => JoystickCapabilities::default(),
        }
    }

    fn joystick_state(&mut self, slot: usize) -> JoystickState {
        self.pump_events();
        if !self.slot_is_connected(slot) {
            return JoystickState::default();
        }
        match self.registry.get(slot).and_then(|s| s.device()) {
            Some(device) => device.read_joystick_state(),
            None => JoystickState::default(),
        }
    }
}
