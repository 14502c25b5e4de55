use std::collections::VecDeque;

use cgmath::Vector3;
use cubie_notation::{Layer, Move, parse_moves};
use cubie_prefs::{Preferences, TwistDriver};
use itertools::Itertools;
use web_time::Duration;

use crate::EngineError;
use crate::cubie::{Cubie, CubieId, CubieIdentity, FaceColorSlots, lattice_indices};
use crate::geometry::Pose;
use crate::layer::LayerSelector;
use crate::mesh::{BoxGeometry, CubieGeometry};
use crate::rotation::{ASSUMED_FPS, EXP_TWIST_FACTOR, RotationState};
use crate::scene::{Pivot, SceneGraph};

/// Animated 3x3x3 cube that turns layers one move at a time.
///
/// Moves are queued in FIFO order. At most one rotation is in progress at a
/// time, and the next queued move starts as soon as the previous one finishes.
/// Call [`CubeEngine::tick()`] once per frame to advance the animation.
#[derive(Debug)]
pub struct CubeEngine<S = ()> {
    pub(crate) prefs: Preferences,
    pub(crate) selector: LayerSelector,

    pub(crate) cubies: Vec<Cubie>,

    /// Moves that have not started yet.
    queue: VecDeque<Move>,
    /// Maximum number of outstanding moves since the queue was last empty.
    queue_max: usize,
    rotation: Option<RotationState>,

    pub(crate) scene: S,
}

impl CubeEngine {
    /// Constructs an engine with box-shaped cubies and no scene graph.
    pub fn new(prefs: &Preferences) -> Result<Self, EngineError> {
        Self::with_scene(prefs, &BoxGeometry, ())
    }
}

impl<S: SceneGraph> CubeEngine<S> {
    /// Constructs an engine that reports to `scene`, with the polygon layout
    /// of `geometry` used to find each cubie's stickers.
    pub fn with_scene(
        prefs: &Preferences,
        geometry: &dyn CubieGeometry,
        mut scene: S,
    ) -> Result<Self, EngineError> {
        prefs.validate()?;

        let pitch = prefs.lattice.pitch();
        let normals = geometry.polygon_normals();
        let mut cubies: Vec<Cubie> = vec![];
        for index @ [x, y, z] in lattice_indices() {
            let identity = CubieIdentity::at_lattice_index(index);

            let coord = |i: usize| (i as f32 - 1.0) * pitch;
            let pose = Pose::at(Vector3::new(coord(x), coord(y), coord(z)));
            let slots = FaceColorSlots::from_normals(&identity, &normals);
            let id = CubieId(cubies.len() as u8);
            let cubie = Cubie::new(id, identity, pose, slots, &prefs.colors);

            scene.set_pose(id, &cubie.pose());
            scene.set_polygon_colors(id, cubie.polygon_colors());
            cubies.push(cubie);
        }
        log::debug!("built {} cubies with pitch {pitch}", cubies.len());

        Ok(Self {
            prefs: prefs.clone(),
            selector: LayerSelector::new(&prefs.lattice),

            cubies,

            queue: VecDeque::new(),
            queue_max: 0,
            rotation: None,

            scene,
        })
    }

    /// Returns the preferences the engine was built with.
    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }
    /// Returns the scene graph.
    pub fn scene(&self) -> &S {
        &self.scene
    }
    /// Returns the scene graph.
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    /// Returns all cubies, indexed by [`CubieId`].
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }
    /// Returns a cubie by ID.
    pub fn cubie(&self, id: CubieId) -> Option<&Cubie> {
        self.cubies.get(id.0 as usize)
    }
    /// Returns the cubie with the given identity.
    pub fn find_cubie(&self, identity: &CubieIdentity) -> Option<&Cubie> {
        self.cubies.iter().find(|cubie| cubie.identity() == identity)
    }

    /// Returns where a cubie is right now, including any rotation in
    /// progress.
    pub fn world_pose(&self, id: CubieId) -> Option<Pose> {
        let pose = self.cubie(id)?.pose();
        match &self.rotation {
            Some(rotation) if rotation.contains(id) => {
                Some(pose.rotated(rotation.pivot().rotation()))
            }
            _ => Some(pose),
        }
    }

    /// Returns the cubies that a move of `layer` would turn if it started now.
    pub fn layer_members(&self, layer: Layer) -> Vec<CubieId> {
        self.cubies
            .iter()
            .filter(|cubie| self.selector.is_in_layer(layer, cubie.pose().position))
            .map(|cubie| cubie.id())
            .collect()
    }

    /// Returns whether a rotation is in progress.
    pub fn is_rotating(&self) -> bool {
        self.rotation.is_some()
    }
    /// Returns the rotation in progress, if any.
    pub fn rotation(&self) -> Option<&RotationState> {
        self.rotation.as_ref()
    }
    /// Returns the moves that have not started yet, in the order they will
    /// run.
    pub fn queued_moves(&self) -> impl Iterator<Item = &Move> {
        self.queue.iter()
    }
    /// Returns the number of moves that have not finished, including the one
    /// in progress.
    pub fn outstanding_moves(&self) -> usize {
        self.queue.len() + self.rotation.is_some() as usize
    }

    /// Parses an algorithm and queues its moves. Returns the number of moves
    /// queued.
    ///
    /// If any token fails to parse, nothing is queued.
    pub fn perform_algorithm(&mut self, algorithm: &str) -> Result<usize, EngineError> {
        let moves = parse_moves(algorithm)?;
        let count = moves.len();
        log::debug!("queueing {count} moves from {algorithm:?}");
        self.enqueue(moves);
        Ok(count)
    }

    /// Queues moves. If the engine is idle, the first one starts
    /// immediately.
    pub fn enqueue(&mut self, moves: impl IntoIterator<Item = Move>) {
        self.queue.extend(moves);
        if self.rotation.is_none() {
            self.start_next_move();
        }
        self.queue_max = std::cmp::max(self.queue_max, self.outstanding_moves());
    }

    /// Advances the rotation in progress by one frame. `delta` is the time
    /// since the last frame, which only the timed driver uses. Returns whether
    /// anything moved.
    pub fn tick(&mut self, delta: Option<Duration>) -> bool {
        let anim = &self.prefs.animation;
        let Some(rotation) = &mut self.rotation else {
            return false;
        };

        let done = match anim.driver {
            TwistDriver::FixedStep => {
                rotation.step_fixed(anim.rotation_speed.to_radians(), anim.angle_tolerance)
            }
            TwistDriver::Timed => {
                let delta = delta.map_or(1.0 / ASSUMED_FPS, |d| d.as_secs_f32());
                let base_speed = delta / anim.twist_duration;
                let speed_mod = match anim.dynamic_twist_speed {
                    true => (self.queue_max.saturating_sub(1) as f32 * EXP_TWIST_FACTOR).exp(),
                    false => 1.0,
                };
                rotation.step_timed(base_speed * speed_mod, anim.twist_interpolation)
            }
        };

        if done {
            self.complete_rotation();
        } else {
            log::trace!("{} at {:?}", rotation.current_move(), rotation.current_angle());
            self.scene.set_pivot(&rotation.pivot());
        }
        true
    }

    /// Finishes the rotation in progress and every queued move, without
    /// animating them.
    pub fn catch_up(&mut self) {
        while self.rotation.is_some() {
            self.complete_rotation();
        }
    }

    /// Returns every cubie to its initial pose. Sticker colors and queued
    /// moves are left alone.
    ///
    /// Fails if a rotation is in progress.
    pub fn reset_cube(&mut self) -> Result<(), EngineError> {
        if let Some(rotation) = &self.rotation {
            return Err(EngineError::InvalidState {
                action: "reset the cube",
                mv: rotation.current_move(),
            });
        }
        for cubie in &mut self.cubies {
            cubie.pose = cubie.initial_pose();
            self.scene.set_pose(cubie.id(), &cubie.pose);
        }
        log::debug!("reset cube");
        Ok(())
    }

    /// Starts the next queued move, if there is one.
    fn start_next_move(&mut self) {
        match self.queue.pop_front() {
            Some(mv) => self.start_rotation(mv),
            None => self.queue_max = 0,
        }
    }

    fn start_rotation(&mut self, mv: Move) {
        let rotation = RotationState::new(mv, self.layer_members(mv.layer));
        log::debug!(
            "starting {mv} about {} axis with {} cubies: {}",
            rotation.axis(),
            rotation.active_group().len(),
            rotation
                .active_group()
                .iter()
                .filter_map(|&id| self.cubie(id))
                .map(|cubie| cubie.identity())
                .join(" "),
        );

        self.scene.set_pivot(&rotation.pivot());
        for &id in rotation.active_group() {
            self.scene.attach_to_pivot(id);
        }
        self.rotation = Some(rotation);
    }

    /// Bakes the rotation in progress into the poses of its cubies, then
    /// starts the next queued move.
    fn complete_rotation(&mut self) {
        let Some(mut rotation) = self.rotation.take() else {
            return;
        };
        rotation.snap_to_goal();
        let pivot = rotation.pivot();
        let q = pivot.rotation();

        self.scene.set_pivot(&pivot);
        for &id in rotation.active_group() {
            if let Some(cubie) = self.cubies.get_mut(id.0 as usize) {
                cubie.pose = cubie.pose.rotated(q);
                self.scene.detach_from_pivot(id, &cubie.pose);
            }
        }
        self.scene.set_pivot(&Pivot::IDENTITY);
        log::debug!("finished {}", rotation.current_move());

        self.start_next_move();
    }
}
