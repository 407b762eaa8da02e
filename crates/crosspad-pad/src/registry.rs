use std::time::{Duration, Instant};

use crate::capabilities::PadCapabilities;

/// One logical player slot.
///
/// A slot binds a stable descriptor (device identity surviving reconnects)
/// to whatever live native handle the device currently has. Slots are
/// reused, never deallocated, so indices stay valid for the process
/// lifetime.
#[derive(Debug)]
pub struct PadSlot<D> {
    descriptor: String,
    handle: u32,
    connected: bool,
    device: Option<D>,
    capabilities: Option<PadCapabilities>,
    last_probe: Option<Instant>,
}

impl<D> PadSlot<D> {
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn handle(&self) -> u32 {
        self.handle
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn device(&self) -> Option<&D> {
        self.device.as_ref()
    }

    pub fn device_mut(&mut self) -> Option<&mut D> {
        self.device.as_mut()
    }

    /// Last-known capabilities. Kept across disconnects so quick polling
    /// during a disconnect grace window keeps its answer.
    pub fn capabilities(&self) -> Option<&PadCapabilities> {
        self.capabilities.as_ref()
    }

    pub fn set_capabilities(&mut self, capabilities: PadCapabilities) {
        self.capabilities = Some(capabilities);
    }
}

/// Which attach rule fired for an arriving device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attach {
    /// The live handle was already registered; nothing changed.
    Duplicate(usize),
    /// A disconnected slot with a matching descriptor was revived.
    Reconnected(usize),
    /// An empty slot was assigned.
    Fresh(usize),
    /// A disconnected slot holding a different device was overwritten.
    Evicted(usize),
    /// Every slot is connected; the device was dropped.
    Ignored,
}

impl Attach {
    pub fn slot(&self) -> Option<usize> {
        match self {
            Attach::Duplicate(s)
            | Attach::Reconnected(s)
            | Attach::Fresh(s)
            | Attach::Evicted(s) => Some(*s),
            Attach::Ignored => None,
        }
    }
}

/// Fixed-capacity registry mapping logical slot indices to native devices.
///
/// Implements the shared connect/disconnect/reconnect contract every backend
/// must satisfy. A registry is an owned value held by its backend, so
/// independent registries can coexist (one per backend instance, one per
/// test).
#[derive(Debug)]
pub struct SlotRegistry<D> {
    slots: Vec<Option<PadSlot<D>>>,
}

impl<D> SlotRegistry<D> {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, slot: usize) -> Option<&PadSlot<D>> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut PadSlot<D>> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// Slot currently bound to a live handle.
    pub fn slot_by_handle(&self, handle: u32) -> Option<usize> {
        self.slots.iter().position(|s| {
            s.as_ref().is_some_and(|s| s.connected && s.handle == handle)
        })
    }

    /// Register an arriving device.
    ///
    /// Rules, in priority order:
    /// 1. a connected slot already holds this live handle: no-op;
    /// 2. a disconnected slot stored this descriptor: reconnect there with
    ///    the new handle (handles change across replug, descriptors don't);
    /// 3. first empty slot;
    /// 4. evict the first disconnected slot;
    /// 5. all slots connected: the device is silently dropped.
    pub fn attach(
        &mut self,
        handle: u32,
        descriptor: &str,
        device: D,
    ) -> Attach {
        if let Some(slot) = self.slot_by_handle(handle) {
            return Attach::Duplicate(slot);
        }

        for (slot, entry) in self.slots.iter_mut().enumerate() {
            if let Some(s) = entry {
                if !s.connected && s.descriptor == descriptor {
                    s.handle = handle;
                    s.connected = true;
                    s.device = Some(device);
                    s.last_probe = None;
                    return Attach::Reconnected(slot);
                }
            }
        }

        let occupy = |handle, descriptor: &str, device| PadSlot {
            descriptor: descriptor.to_string(),
            handle,
            connected: true,
            device: Some(device),
            capabilities: None,
            last_probe: None,
        };

        if let Some(slot) = self.slots.iter().position(Option::is_none) {
            self.slots[slot] = Some(occupy(handle, descriptor, device));
            return Attach::Fresh(slot);
        }

        if let Some(slot) = self
            .slots
            .iter()
            .position(|s| s.as_ref().is_some_and(|s| !s.connected))
        {
            self.slots[slot] = Some(occupy(handle, descriptor, device));
            return Attach::Evicted(slot);
        }

        Attach::Ignored
    }

    /// Handle a removal event for a live handle.
    ///
    /// Marks the slot disconnected and returns the owned device so the
    /// caller drops it (haptic handle before device handle, by field order).
    /// Cached capabilities stay in place.
    pub fn detach(&mut self, handle: u32) -> Option<(usize, D)> {
        let slot = self.slot_by_handle(handle)?;
        let entry = self.slots.get_mut(slot)?.as_mut()?;
        entry.connected = false;
        entry.last_probe = None;
        entry.device.take().map(|d| (slot, d))
    }

    /// Degrade a slot whose native query failed mid-poll.
    pub fn mark_disconnected(&mut self, slot: usize) -> Option<D> {
        let entry = self.slots.get_mut(slot)?.as_mut()?;
        entry.connected = false;
        entry.last_probe = None;
        entry.device.take()
    }

    /// Rate-limit liveness probes of a disconnected slot.
    ///
    /// Returns true at most once per `interval`, so known-absent devices do
    /// not pay a native capability query every frame. Connected slots always
    /// probe.
    pub fn should_probe(&mut self, slot: usize, interval: Duration) -> bool {
        let Some(entry) = self.slots.get_mut(slot).and_then(Option::as_mut)
        else {
            return false;
        };
        if entry.connected {
            return true;
        }
        let now = Instant::now();
        match entry.last_probe {
            Some(t) if now.duration_since(t) < interval => false,
            _ => {
                entry.last_probe = Some(now);
                true
            }
        }
    }
}
