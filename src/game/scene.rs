//! Scene
//!
//! The scene owns every live object, in insertion order, and runs the
//! per-frame passes over them:
//!
//! 1. update every active object with the frame's delta time
//! 2. recenter the camera on the tracked object
//! 3. resolve collisions
//! 4. (render) clear, set the view, draw every active object in order
//!
//! Inactive objects stay in the collection but are skipped by update and
//! render. The camera follows an [`ObjectId`], so removing or reordering
//! other objects never changes what it tracks.

use macroquad::prelude::{Color, Vec2};

use super::collision::{CollisionResolver, NoCollision};
use super::entity::{IdAllocator, ObjectId};
use super::event::Events;
use super::object::{FrameContext, GameObject};
use super::renderer::{Surface, View};
use crate::input::InputSource;

pub struct Scene {
    /// Live objects in update/render order
    objects: Vec<(ObjectId, GameObject)>,
    ids: IdAllocator,
    /// Object the camera follows
    tracked: Option<ObjectId>,
    view: View,
    collisions: Box<dyn CollisionResolver>,
    /// Events queued by objects during the last update
    pub events: Events,
}

impl Scene {
    /// An empty scene whose camera shows `view_size` world units
    pub fn new(view_size: Vec2) -> Self {
        Self {
            objects: Vec::new(),
            ids: IdAllocator::new(),
            tracked: None,
            view: View::new(view_size),
            collisions: Box::new(NoCollision),
            events: Events::new(),
        }
    }

    /// Builder: use `resolver` for the collision pass
    pub fn with_collisions(mut self, resolver: impl CollisionResolver + 'static) -> Self {
        self.collisions = Box::new(resolver);
        self
    }

    // =========================================================================
    // Object Management
    // =========================================================================

    /// Add an object at the end of the update/render order.
    ///
    /// The first object spawned into a scene with no camera target becomes
    /// the camera target.
    pub fn spawn(&mut self, object: GameObject) -> ObjectId {
        let id = self.ids.allocate();
        self.objects.push((id, object));
        if self.tracked.is_none() {
            self.tracked = Some(id);
        }
        log::debug!("spawned object {}", id);
        id
    }

    /// Remove an object, returning it. Stale ids return None.
    pub fn despawn(&mut self, id: ObjectId) -> Option<GameObject> {
        if !self.ids.free(id) {
            return None;
        }
        let slot = self.objects.iter().position(|(oid, _)| *oid == id)?;
        let (_, object) = self.objects.remove(slot);
        log::debug!("despawned object {}", id);
        Some(object)
    }

    pub fn get(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.iter().find(|(oid, _)| *oid == id).map(|(_, o)| o)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.iter_mut().find(|(oid, _)| *oid == id).map(|(_, o)| o)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.ids.is_alive(id)
    }

    /// Objects in update/render order
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &GameObject)> {
        self.objects.iter().map(|(id, o)| (*id, o))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    // =========================================================================
    // Camera
    // =========================================================================

    /// Follow `id` with the camera
    pub fn track(&mut self, id: ObjectId) {
        self.tracked = Some(id);
    }

    pub fn tracked(&self) -> Option<ObjectId> {
        self.tracked
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Center on the tracked object's bounds position.
    /// If it is gone the camera stays where it was.
    fn follow_tracked(&mut self) {
        let Some(id) = self.tracked else { return };
        if let Some(object) = self.get(id) {
            self.view.center = object.bounds().point();
        }
    }

    // =========================================================================
    // Frame Passes
    // =========================================================================

    /// Run one frame of simulation with `delta_time` seconds
    pub fn update(&mut self, delta_time: f32, input: &dyn InputSource) {
        for (id, object) in self.objects.iter_mut() {
            if !object.is_active() {
                continue;
            }
            let mut ctx = FrameContext {
                id: *id,
                input,
                events: &mut self.events,
            };
            object.update(delta_time, &mut ctx);
        }

        self.follow_tracked();
        self.collisions.resolve(&mut self.objects);
    }

    /// Draw the frame: clear, apply the camera, draw active objects in order
    pub fn render(&self, surface: &mut dyn Surface, clear_color: Color) {
        surface.clear(clear_color);
        surface.set_view(&self.view);
        for (_, object) in self.objects.iter().filter(|(_, o)| o.is_active()) {
            object.render(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerSettings;
    use crate::game::animation::Animation;
    use crate::game::collision::FloorPlane;
    use crate::game::player::{Player, IDLE};
    use crate::game::renderer::RecordingSurface;
    use crate::game::sprite::Sprite;
    use crate::input::{Action, ScriptedInput};
    use macroquad::prelude::{vec2, Rect, SKYBLUE};

    fn player_at(position: Vec2) -> GameObject {
        let mut sprite = Sprite::empty();
        sprite.set_source(Rect::new(0.0, 0.0, 32.0, 32.0));
        let mut obj = GameObject::player(Player::new(&PlayerSettings::default()), sprite);
        obj.add_animation(IDLE, Animation::from_strip(Vec2::ZERO, vec2(32.0, 32.0), 2, 0.1));
        obj.play_animation(IDLE);
        obj.set_position(position);
        obj
    }

    fn scenery_at(position: Vec2) -> GameObject {
        let mut obj = GameObject::scenery(Sprite::empty());
        obj.add_animation("glow", Animation::from_strip(Vec2::ZERO, vec2(16.0, 16.0), 4, 0.1));
        obj.play_animation("glow");
        obj.set_position(position);
        obj
    }

    #[test]
    fn test_inactive_objects_are_frozen_and_hidden() {
        let mut scene = Scene::new(vec2(800.0, 600.0));
        let active = scene.spawn(player_at(vec2(0.0, 0.0)));
        let frozen = scene.spawn(player_at(vec2(100.0, 0.0)));
        scene.get_mut(frozen).unwrap().set_active(false);

        let input = ScriptedInput::holding(&[Action::MoveRight]);
        let mut surface = RecordingSurface::default();
        for _ in 0..20 {
            scene.update(0.1, &input);
            scene.render(&mut surface, SKYBLUE);
        }

        let frozen_obj = scene.get(frozen).unwrap();
        assert_eq!(frozen_obj.position(), vec2(100.0, 0.0));
        assert_eq!(frozen_obj.current_animation_name(), Some(IDLE));
        assert_eq!(frozen_obj.current_animation().unwrap().current_frame(), 0);
        assert_eq!(frozen_obj.kinematics().unwrap().velocity, Vec2::ZERO);

        // Only the active object was ever drawn
        assert_eq!(surface.sprites.len(), 20);
        let active_pos = scene.get(active).unwrap().position();
        assert_eq!(*surface.sprites.last().unwrap(), active_pos);
    }

    #[test]
    fn test_render_order_and_clear() {
        let mut scene = Scene::new(vec2(800.0, 600.0));
        scene.spawn(scenery_at(vec2(1.0, 0.0)));
        scene.spawn(scenery_at(vec2(2.0, 0.0)));
        scene.spawn(scenery_at(vec2(3.0, 0.0)));

        let mut surface = RecordingSurface::default();
        scene.render(&mut surface, SKYBLUE);

        assert_eq!(surface.clears, vec![SKYBLUE]);
        assert_eq!(surface.views.len(), 1);
        assert_eq!(surface.sprites, vec![vec2(1.0, 0.0), vec2(2.0, 0.0), vec2(3.0, 0.0)]);
    }

    #[test]
    fn test_all_objects_see_same_delta() {
        let mut scene = Scene::new(vec2(800.0, 600.0));
        let a = scene.spawn(scenery_at(Vec2::ZERO));
        let b = scene.spawn(scenery_at(Vec2::ZERO));

        scene.update(0.1, &ScriptedInput::new());

        let frame = |id| scene.get(id).unwrap().current_animation().unwrap().current_frame();
        assert_eq!(frame(a), 1);
        assert_eq!(frame(b), 1);
    }

    #[test]
    fn test_camera_follows_tracked_id() {
        let mut scene = Scene::new(vec2(800.0, 600.0));
        let first = scene.spawn(scenery_at(vec2(10.0, 20.0)));
        let second = scene.spawn(scenery_at(vec2(300.0, 40.0)));
        assert_eq!(scene.tracked(), Some(first));

        scene.update(0.01, &ScriptedInput::new());
        assert_eq!(scene.view().center, vec2(10.0, 20.0));

        scene.track(second);
        scene.update(0.01, &ScriptedInput::new());
        assert_eq!(scene.view().center, vec2(300.0, 40.0));

        // Removing the target leaves the camera in place
        scene.despawn(second);
        scene.update(0.01, &ScriptedInput::new());
        assert_eq!(scene.view().center, vec2(300.0, 40.0));
    }

    #[test]
    fn test_despawn_keeps_order_and_invalidates_id() {
        let mut scene = Scene::new(vec2(800.0, 600.0));
        let a = scene.spawn(scenery_at(vec2(1.0, 0.0)));
        let b = scene.spawn(scenery_at(vec2(2.0, 0.0)));
        let c = scene.spawn(scenery_at(vec2(3.0, 0.0)));

        assert!(scene.despawn(b).is_some());
        assert!(scene.despawn(b).is_none());
        assert!(!scene.contains(b));

        let order: Vec<_> = scene.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![a, c]);

        // Reused slot does not resurrect the old id
        let d = scene.spawn(scenery_at(vec2(4.0, 0.0)));
        assert_eq!(d.index(), b.index());
        assert!(scene.get(b).is_none());
        assert!(scene.get(d).is_some());
    }

    #[test]
    fn test_player_lands_and_jumps() {
        let mut scene = Scene::new(vec2(800.0, 600.0)).with_collisions(FloorPlane::new(500.0));
        let player = scene.spawn(player_at(vec2(100.0, 400.0)));

        let idle = ScriptedInput::new();
        for _ in 0..120 {
            scene.update(1.0 / 60.0, &idle);
        }
        let obj = scene.get(player).unwrap();
        assert!(obj.kinematics().unwrap().grounded);
        assert!((obj.bounds().bottom() - 500.0).abs() < 1e-3);

        scene.update(1.0 / 60.0, &ScriptedInput::holding(&[Action::Jump]));
        assert_eq!(scene.events.jumped.len(), 1);
        let obj = scene.get(player).unwrap();
        assert!(!obj.kinematics().unwrap().grounded);
        assert!(obj.kinematics().unwrap().velocity.y < 0.0);
        assert!(obj.bounds().bottom() < 500.0);
    }
}
