use std::collections::BTreeSet;

use crate::texture::TextureHandle;

/// The auxiliary planes the carousel composes next to the featured surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PlaneId {
    Description,
    LiveDemo,
    SourceCode,
}

/// Mount position for a link plane. The source-code plane sits at `Primary`
/// next to the live-demo plane, and shifts to `Secondary` when it is the
/// only link shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Slot {
    #[default]
    Primary,
    Secondary,
}

/// Renderer-facing proxy for one UI plane: which texture it shows, how
/// opaque it is, and which slot it occupies. The scene graph reads these
/// values each frame; the core only mutates them.
#[derive(Clone, Debug)]
pub struct Plane {
    id: PlaneId,
    texture: TextureHandle,
    opacity: f32,
    slot: Slot,
}

impl Plane {
    pub fn new(id: PlaneId, texture: TextureHandle) -> Self {
        Self {
            id,
            texture,
            opacity: 1.0,
            slot: Slot::Primary,
        }
    }

    pub fn id(&self) -> PlaneId {
        self.id
    }

    pub fn texture(&self) -> &TextureHandle {
        &self.texture
    }

    pub fn set_texture(&mut self, texture: TextureHandle) {
        self.texture = texture;
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn set_slot(&mut self, slot: Slot) {
        self.slot = slot;
    }
}

/// Guard over the shared scene collection. Planes are inserted into and
/// removed from one scene owned by the renderer; double insertion or
/// removal must be a no-op.
#[derive(Debug, Default)]
pub struct AttachSet {
    attached: BTreeSet<PlaneId>,
}

impl AttachSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the plane was newly attached.
    pub fn attach(&mut self, id: PlaneId) -> bool {
        self.attached.insert(id)
    }

    /// Returns true if the plane was actually removed.
    pub fn detach(&mut self, id: PlaneId) -> bool {
        self.attached.remove(&id)
    }

    pub fn contains(&self, id: PlaneId) -> bool {
        self.attached.contains(&id)
    }
}
