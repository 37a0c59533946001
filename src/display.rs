use crate::ease::Ease;
use crate::texture::TextureHandle;
use crate::tween::{Progress, Tween};

/// Default crossfade length in seconds.
pub const CROSSFADE_DURATION: f32 = 1.0;

/// Animatable parameters of the featured surface's shader: two texture
/// inputs and the blend scalar between them. At rest `blend == 0` and
/// `texture_prev` holds the visible image.
#[derive(Clone, Debug)]
pub struct DisplayUniforms {
    pub texture_prev: TextureHandle,
    pub texture_next: TextureHandle,
    pub blend: f32,
}

/// The featured display surface: a single renderable plane whose shader
/// blends `texture_prev` toward `texture_next`.
///
/// Re-entrant [`transition_to`](Self::transition_to) calls follow a
/// latest-wins policy: the in-flight blend keeps running and only the
/// staged `texture_next` is replaced, so a rapid second call blends
/// directly toward the newest texture and the intermediate target is
/// silently dropped. There is no queue.
#[derive(Debug)]
pub struct CrossfadeDisplay {
    uniforms: DisplayUniforms,
    duration: f32,
    fade: Option<Tween>,
}

impl CrossfadeDisplay {
    pub fn new(initial: TextureHandle) -> Self {
        Self::with_duration(initial, CROSSFADE_DURATION)
    }

    pub fn with_duration(initial: TextureHandle, duration: f32) -> Self {
        Self {
            uniforms: DisplayUniforms {
                texture_prev: initial.clone(),
                texture_next: initial,
                blend: 0.0,
            },
            duration,
            fade: None,
        }
    }

    /// Stages `next` and starts the blend if the surface is at rest.
    /// Transitioning to the texture already visible is legal and simply
    /// looks like nothing happened.
    pub fn transition_to(&mut self, next: TextureHandle) {
        self.uniforms.texture_next = next;
        if self.fade.is_none() {
            self.fade = Some(Tween::new(0.0, 1.0, self.duration, Ease::Linear));
        }
    }

    /// Advances the blend by `dt`. Returns true on the tick the transition
    /// completes, after the blend has been reset and `texture_next`
    /// promoted into `texture_prev`.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(fade) = &mut self.fade else {
            return false;
        };
        match fade.advance(dt) {
            Progress::Running(value) => {
                self.uniforms.blend = value;
                false
            }
            Progress::Done(_) => {
                self.fade = None;
                self.uniforms.blend = 0.0;
                self.uniforms.texture_prev = self.uniforms.texture_next.clone();
                true
            }
        }
    }

    pub fn in_transition(&self) -> bool {
        self.fade.is_some()
    }

    pub fn uniforms(&self) -> &DisplayUniforms {
        &self.uniforms
    }

    /// The image the surface settles on once no animation is running.
    pub fn resting_texture(&self) -> &TextureHandle {
        &self.uniforms.texture_prev
    }
}
