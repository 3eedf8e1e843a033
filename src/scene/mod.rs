//! Scene: the owner of the object collection, render bounds, and frame
//! pacing.
//!
//! Objects live in one ordered list; insertion order is the z-order (later
//! additions draw on top). The host environment owns the actual frame
//! clock and calls [`Scene::tick`] once per animation frame with a borrowed
//! render surface.
//!
//! A scene moves through `Created → Attached → Running ⇄ Paused`. It is
//! created with its bounds, attached once the host signals that a render
//! surface exists, starts running on the first tick, and can be paused and
//! resumed from then on.

pub mod clock;

use log::{debug, warn};

use crate::error::EngineError;
use crate::math::Vector2;
use crate::object::GameObject;
use crate::surface::{Color, RenderSurface};

const DEFAULT_TARGET_FPS: f64 = 60.0;

/// Handle to an object owned by a scene, returned by [`Scene::add`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(u64);

/// Lifecycle state of a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneState {
    /// Bounds set, no render surface yet.
    Created,
    /// Surface exists; the first tick starts the frame loop.
    Attached,
    /// Ticking every frame.
    Running,
    /// Ticks are skipped until [`Scene::resume`].
    Paused,
}

struct Entry {
    id: ObjectId,
    object: Box<dyn GameObject>,
}

/// Ordered collection of game objects plus the per-frame update/draw cycle.
pub struct Scene {
    bounds: Vector2,
    objects: Vec<Entry>,
    next_id: u64,
    target_fps: f64,
    last_frame_ms: f64,
    state: SceneState,
    background: Color,
}

impl Scene {
    /// Create a scene with the given render bounds (width, height).
    pub fn new(bounds: Vector2) -> Self {
        Self {
            bounds,
            objects: Vec::new(),
            next_id: 0,
            target_fps: DEFAULT_TARGET_FPS,
            last_frame_ms: 0.0,
            state: SceneState::Created,
            background: Color::BLACK,
        }
    }

    /// Render bounds (width, height).
    pub fn bounds(&self) -> Vector2 {
        self.bounds
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SceneState {
        self.state
    }

    /// Background fill color painted at the start of every tick.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Change the background fill color.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Expected update count per second. Changing this does not change how
    /// often the host ticks the scene; it rescales how far objects move per
    /// tick. Defaults to 60.
    pub fn target_frame_rate(&self) -> f64 {
        self.target_fps
    }

    /// Set the expected update count per second.
    pub fn set_target_frame_rate(&mut self, fps: f64) -> Result<(), EngineError> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(EngineError::invalid_arguments(
                "finite frame rate > 0",
                fps.to_string(),
            ));
        }
        self.target_fps = fps;
        Ok(())
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Object ids in draw order (back to front).
    pub fn z_order(&self) -> Vec<ObjectId> {
        self.objects.iter().map(|entry| entry.id).collect()
    }

    /// Append an object; it draws on top of everything added before it.
    pub fn add(&mut self, object: Box<dyn GameObject>) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.push(Entry { id, object });
        id
    }

    /// Borrow an object by id.
    pub fn object(&self, id: ObjectId) -> Option<&dyn GameObject> {
        self.objects
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.object.as_ref())
    }

    /// Mutably borrow an object by id.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut (dyn GameObject + 'static)> {
        self.objects
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| entry.object.as_mut())
    }

    /// Remove an object from the scene, returning ownership of it.
    pub fn remove(&mut self, id: ObjectId) -> Result<Box<dyn GameObject>, EngineError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| EngineError::inexistent("object", "scene"))?;
        Ok(self.objects.remove(index).object)
    }

    /// Move `id` immediately before `before` in the z-order.
    pub fn reorder_before(&mut self, id: ObjectId, before: ObjectId) -> Result<(), EngineError> {
        if id == before {
            return Ok(());
        }
        let from = self
            .index_of(id)
            .ok_or_else(|| EngineError::inexistent("object", "scene"))?;
        let mut to = self
            .index_of(before)
            .ok_or_else(|| EngineError::inexistent("object", "scene"))?;
        if from < to {
            to -= 1;
        }
        let entry = self.objects.remove(from);
        self.objects.insert(to, entry);
        Ok(())
    }

    /// Mark the render surface as ready. Callable exactly once, before any
    /// tick.
    pub fn attach(&mut self) -> Result<(), EngineError> {
        if self.state != SceneState::Created {
            return Err(EngineError::invalid_state(format!(
                "attach is only valid once, from the Created state, found {:?}",
                self.state
            )));
        }
        self.last_frame_ms = clock::now_ms();
        self.state = SceneState::Attached;
        Ok(())
    }

    /// Stop advancing on ticks. Ticks received while paused are skipped.
    pub fn pause(&mut self) {
        match self.state {
            SceneState::Attached | SceneState::Running => self.state = SceneState::Paused,
            state => warn!("pause ignored in state {state:?}"),
        }
    }

    /// Resume after a pause. The frame timestamp resets to now so the next
    /// delta does not cover the whole paused period.
    pub fn resume(&mut self) {
        match self.state {
            SceneState::Paused => {
                self.last_frame_ms = clock::now_ms();
                self.state = SceneState::Running;
            }
            state => warn!("resume ignored in state {state:?}"),
        }
    }

    /// Whether ticks currently advance the scene.
    pub fn is_running(&self) -> bool {
        self.state == SceneState::Running
    }

    /// Advance and draw one frame.
    ///
    /// Computes the frame-rate-normalized delta, fills the background, then
    /// integrates and draws every object in z-order. A failure in one
    /// object's step is logged and skipped; it never stops the frame loop.
    pub fn tick(&mut self, surface: &mut dyn RenderSurface) -> Result<(), EngineError> {
        match self.state {
            SceneState::Created => {
                return Err(EngineError::invalid_state(
                    "the scene has no render surface attached yet",
                ));
            }
            SceneState::Paused => {
                debug!("tick skipped: scene is paused");
                return Ok(());
            }
            SceneState::Attached => self.state = SceneState::Running,
            SceneState::Running => {}
        }

        let now = clock::now_ms();
        let delta = (now - self.last_frame_ms) * self.target_fps / 1000.0;

        surface.set_fill_color(self.background);
        surface.fill_rect(Vector2::zero(), self.bounds);

        let bounds = self.bounds;
        for entry in self.objects.iter_mut() {
            if let Err(err) = step_object(entry, bounds, delta, now, surface) {
                warn!(
                    "object {:?} failed this frame and was skipped: {err}",
                    entry.id
                );
            }
        }

        self.last_frame_ms = now;
        Ok(())
    }

    fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|entry| entry.id == id)
    }
}

fn step_object(
    entry: &mut Entry,
    bounds: Vector2,
    delta: f64,
    now_ms: f64,
    surface: &mut dyn RenderSurface,
) -> Result<(), EngineError> {
    entry.object.integrate(bounds, delta)?;
    if !entry.object.body().is_hidden() {
        entry.object.draw(surface, now_ms)?;
    }
    Ok(())
}
