use tracing::{debug, info};

use crate::catalog::GalleryCatalog;
use crate::display::CrossfadeDisplay;
use crate::ease::Ease;
use crate::scene::{AttachSet, Plane, PlaneId, Slot};
use crate::texture::TextureHandle;
use crate::tween::{Progress, Tween};

/// Default fade length for the auxiliary planes, in seconds.
pub const AUX_FADE_DURATION: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselPhase {
    Idle,
    Transitioning,
}

/// Notified exactly once, when every catalog entry has been seen.
pub trait CompletionSink {
    fn on_all_seen(&mut self);
}

/// Opens an external link on behalf of the gallery. The host decides what
/// "open" means (browser tab, overlay, nothing).
pub trait LinkOpener {
    fn open(&mut self, url: &str);
}

/// Static art for the two link buttons, resolved from the texture library
/// by the host.
#[derive(Clone, Debug)]
pub struct LinkArt {
    pub live_demo: TextureHandle,
    pub source_code: TextureHandle,
}

/// Auxiliary fade sequence: everything fades out, then the description
/// texture and link planes are swapped for the target entry, then
/// everything fades back in. The generation stamp ties the pending swap to
/// the `advance` call that scheduled it.
#[derive(Debug)]
enum AuxPhase {
    FadeOut {
        tween: Tween,
        entry_index: usize,
        generation: u64,
    },
    FadeIn {
        tween: Tween,
    },
}

/// Drives the featured display: navigation, crossfade, auxiliary plane
/// composition, and seen tracking.
///
/// Single-threaded and frame-driven: the host forwards input events to
/// [`advance`](Self::advance) and calls [`tick`](Self::tick) once per
/// frame. `advance` is callable in any state; a call during a running
/// transition supersedes the pending fade sequence (latest wins, enforced
/// by the generation stamp) and re-targets the crossfade.
pub struct CarouselController {
    catalog: GalleryCatalog,
    display: CrossfadeDisplay,
    description: Plane,
    live_demo: Plane,
    source_code: Plane,
    attached: AttachSet,
    current_index: usize,
    generation: u64,
    aux: Option<AuxPhase>,
    all_seen: bool,
    completion: Box<dyn CompletionSink>,
    opener: Box<dyn LinkOpener>,
}

impl CarouselController {
    /// Boots on entry 0: both crossfade uniforms hold its display texture,
    /// the description plane shows its description, and the link planes
    /// reflect its URLs.
    pub fn new(
        catalog: GalleryCatalog,
        link_art: LinkArt,
        completion: Box<dyn CompletionSink>,
        opener: Box<dyn LinkOpener>,
    ) -> Self {
        let boot = catalog.entry(0);
        let display = CrossfadeDisplay::new(boot.display.clone());
        let description = Plane::new(PlaneId::Description, boot.description.clone());

        let mut controller = Self {
            catalog,
            display,
            description,
            live_demo: Plane::new(PlaneId::LiveDemo, link_art.live_demo),
            source_code: Plane::new(PlaneId::SourceCode, link_art.source_code),
            attached: AttachSet::new(),
            current_index: 0,
            generation: 0,
            aux: None,
            all_seen: false,
            completion,
            opener,
        };
        controller.attached.attach(PlaneId::Description);
        controller.apply_entry(0);
        controller
    }

    /// Navigates one step and kicks off the crossfade and the auxiliary
    /// fade sequence for the target entry.
    #[tracing::instrument(skip(self))]
    pub fn advance(&mut self, direction: Direction) {
        let count = self.catalog.len();
        self.current_index = match direction {
            Direction::Next => (self.current_index + 1) % count,
            Direction::Prev => (self.current_index + count - 1) % count,
        };

        let display_texture = self.catalog.entry(self.current_index).display.clone();
        self.display.transition_to(display_texture);

        self.catalog.mark_seen(self.current_index);
        if !self.all_seen && self.catalog.all_seen() {
            self.all_seen = true;
            info!("every gallery entry has been seen");
            self.completion.on_all_seen();
        }

        // Restart the fade sequence; a pending one is superseded and its
        // texture swap will never land.
        self.generation += 1;
        self.aux = Some(AuxPhase::FadeOut {
            tween: Tween::new(self.description.opacity(), 0.0, AUX_FADE_DURATION, Ease::OutQuad),
            entry_index: self.current_index,
            generation: self.generation,
        });

        debug!(index = self.current_index, "carousel navigated");
    }

    /// Advances all running animations by `dt`. The crossfade and the
    /// auxiliary fade progress independently and may complete on
    /// different ticks.
    pub fn tick(&mut self, dt: f32) {
        if self.display.tick(dt) {
            debug!("crossfade complete");
        }
        if let Some(phase) = self.aux.take() {
            self.aux = self.advance_aux(phase, dt);
        }
    }

    fn advance_aux(&mut self, phase: AuxPhase, dt: f32) -> Option<AuxPhase> {
        match phase {
            AuxPhase::FadeOut {
                mut tween,
                entry_index,
                generation,
            } => match tween.advance(dt) {
                Progress::Running(opacity) => {
                    self.set_aux_opacity(opacity);
                    Some(AuxPhase::FadeOut {
                        tween,
                        entry_index,
                        generation,
                    })
                }
                Progress::Done(opacity) => {
                    self.set_aux_opacity(opacity);
                    if generation != self.generation {
                        // Superseded by a newer advance; drop the stale swap.
                        return None;
                    }
                    self.apply_entry(entry_index);
                    Some(AuxPhase::FadeIn {
                        tween: Tween::new(0.0, 1.0, AUX_FADE_DURATION, Ease::OutQuad),
                    })
                }
            },
            AuxPhase::FadeIn { mut tween } => {
                let progress = tween.advance(dt);
                self.set_aux_opacity(progress.value());
                match progress {
                    Progress::Running(_) => Some(AuxPhase::FadeIn { tween }),
                    Progress::Done(_) => None,
                }
            }
        }
    }

    fn set_aux_opacity(&mut self, opacity: f32) {
        self.description.set_opacity(opacity);
        self.live_demo.set_opacity(opacity);
        self.source_code.set_opacity(opacity);
    }

    /// Swaps the description texture and composes the link planes for the
    /// entry at `index`:
    ///
    /// - both URLs present: both planes attached, source code at its
    ///   primary slot,
    /// - live demo only: only the live-demo plane attached,
    /// - source code only: only the source-code plane attached, shifted to
    ///   the secondary slot,
    /// - neither: both detached.
    fn apply_entry(&mut self, index: usize) {
        let entry = self.catalog.entry(index);
        let description = entry.description.clone();
        let has_live = entry.live_demo.is_some();
        let has_source = entry.source_code.is_some();

        self.description.set_texture(description);

        match (has_live, has_source) {
            (true, true) => {
                self.attached.attach(PlaneId::LiveDemo);
                self.attached.attach(PlaneId::SourceCode);
                self.source_code.set_slot(Slot::Primary);
            }
            (true, false) => {
                self.source_code.set_slot(Slot::Primary);
                self.attached.detach(PlaneId::SourceCode);
                self.attached.attach(PlaneId::LiveDemo);
            }
            (false, true) => {
                self.attached.detach(PlaneId::LiveDemo);
                self.attached.attach(PlaneId::SourceCode);
                self.source_code.set_slot(Slot::Secondary);
            }
            (false, false) => {
                self.attached.detach(PlaneId::LiveDemo);
                self.attached.detach(PlaneId::SourceCode);
            }
        }
    }

    /// Opens the current entry's live-demo link. No URL is a silent no-op;
    /// the control may be shown disabled.
    pub fn open_live_demo(&mut self) {
        if let Some(url) = self.catalog.entry(self.current_index).live_demo.as_deref() {
            self.opener.open(url);
        }
    }

    /// Opens the current entry's source-code link. No URL is a silent no-op.
    pub fn open_source_code(&mut self) {
        if let Some(url) = self.catalog.entry(self.current_index).source_code.as_deref() {
            self.opener.open(url);
        }
    }

    pub fn phase(&self) -> CarouselPhase {
        if self.display.in_transition() {
            CarouselPhase::Transitioning
        } else {
            CarouselPhase::Idle
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn all_seen(&self) -> bool {
        self.all_seen
    }

    pub fn catalog(&self) -> &GalleryCatalog {
        &self.catalog
    }

    pub fn display(&self) -> &CrossfadeDisplay {
        &self.display
    }

    pub fn description_plane(&self) -> &Plane {
        &self.description
    }

    pub fn live_demo_plane(&self) -> &Plane {
        &self.live_demo
    }

    pub fn source_code_plane(&self) -> &Plane {
        &self.source_code
    }

    pub fn is_attached(&self, id: PlaneId) -> bool {
        self.attached.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogConfig, EntryConfig};
    use crate::texture::TextureLibrary;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct CountingSink(Rc<RefCell<usize>>);

    impl CompletionSink for CountingSink {
        fn on_all_seen(&mut self) {
            *self.0.borrow_mut() += 1;
        }
    }

    struct RecordingOpener(Rc<RefCell<Vec<String>>>);

    impl LinkOpener for RecordingOpener {
        fn open(&mut self, url: &str) {
            self.0.borrow_mut().push(url.to_string());
        }
    }

    fn entry(id: &str, live: Option<&str>, source: Option<&str>) -> EntryConfig {
        EntryConfig {
            id: id.to_string(),
            display: format!("{id}_display"),
            description: format!("{id}_desc"),
            live_demo: live.map(str::to_string),
            source_code: source.map(str::to_string),
            seen: false,
        }
    }

    fn build(
        entries: Vec<EntryConfig>,
    ) -> (CarouselController, Rc<RefCell<usize>>, Rc<RefCell<Vec<String>>>) {
        let mut lib = TextureLibrary::new();
        for e in &entries {
            lib.insert(e.display.clone(), TextureHandle::new(e.display.as_str()));
            lib.insert(
                e.description.clone(),
                TextureHandle::new(e.description.as_str()),
            );
        }
        let catalog =
            GalleryCatalog::from_config(&CatalogConfig { entries }, &lib).unwrap();
        let signals = Rc::new(RefCell::new(0));
        let opened = Rc::new(RefCell::new(Vec::new()));
        let controller = CarouselController::new(
            catalog,
            LinkArt {
                live_demo: TextureHandle::new("live_demo_button"),
                source_code: TextureHandle::new("source_code_button"),
            },
            Box::new(CountingSink(signals.clone())),
            Box::new(RecordingOpener(opened.clone())),
        );
        (controller, signals, opened)
    }

    fn settle(controller: &mut CarouselController) {
        // Longer than both the crossfade and the two-stage aux fade.
        for _ in 0..40 {
            controller.tick(0.1);
        }
    }

    #[test]
    fn boot_state_is_entry_zero_at_rest() {
        let (controller, _, _) = build(vec![
            entry("a", Some("https://a"), Some("https://a-src")),
            entry("b", None, None),
        ]);
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.phase(), CarouselPhase::Idle);
        assert_eq!(controller.display().resting_texture().key(), "a_display");
        assert_eq!(controller.description_plane().texture().key(), "a_desc");
        assert!(controller.is_attached(PlaneId::LiveDemo));
        assert!(controller.is_attached(PlaneId::SourceCode));
    }

    #[test]
    fn advance_enters_transitioning_then_returns_to_idle() {
        let (mut controller, _, _) = build(vec![
            entry("a", None, None),
            entry("b", None, None),
        ]);
        controller.advance(Direction::Next);
        assert_eq!(controller.phase(), CarouselPhase::Transitioning);
        settle(&mut controller);
        assert_eq!(controller.phase(), CarouselPhase::Idle);
        assert_eq!(controller.display().resting_texture().key(), "b_display");
        assert_eq!(controller.description_plane().texture().key(), "b_desc");
        assert_eq!(controller.description_plane().opacity(), 1.0);
    }

    #[test]
    fn open_with_missing_url_is_silent() {
        let (mut controller, _, opened) = build(vec![entry("a", None, None)]);
        controller.open_live_demo();
        controller.open_source_code();
        assert!(opened.borrow().is_empty());
    }

    #[test]
    fn open_reads_current_entry() {
        let (mut controller, _, opened) = build(vec![
            entry("a", Some("https://a"), None),
            entry("b", Some("https://b"), None),
        ]);
        controller.open_live_demo();
        controller.advance(Direction::Next);
        controller.open_live_demo();
        assert_eq!(opened.borrow().as_slice(), ["https://a", "https://b"]);
    }

    #[test]
    fn completion_latches_after_full_loop() {
        let (mut controller, signals, _) = build(vec![
            entry("a", None, None),
            entry("b", None, None),
        ]);
        controller.advance(Direction::Next);
        controller.advance(Direction::Next);
        controller.advance(Direction::Next);
        assert_eq!(*signals.borrow(), 1);
    }
}
