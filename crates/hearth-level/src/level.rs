//! Level - the registry that owns every object and the passability map

use crate::component::{
    AnimationComponent, AnimationState, MonsterMovementComponent, RenderComponent, TickContext,
};
use crate::config::ConfigTable;
use crate::object::{GameObject, ObjectType};
use crate::passability::{GridSize, PassabilityMap};
use crate::record::{LevelData, ObjectRecord};
use hearth_core::{HearthError, ObjectId, Result, Time, Vec2, Vec3};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// What the render collaborator needs to draw one object
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem<'a> {
    pub id: ObjectId,
    pub mesh: &'a str,
    pub position: Vec3,
    pub yaw: f32,
    pub scale: f32,
    pub animation: AnimationState,
    pub clip: &'a str,
}

/// One world instance.
///
/// Owns:
/// - every [`GameObject`], keyed by id
/// - the static [`PassabilityMap`]
/// - the tick length handed to components
///
/// Objects only see the rest of the level through the [`TickContext`] built
/// for each update, so teardown is a plain walk over the map.
pub struct Level {
    size: GridSize,
    time: Time,
    objects: BTreeMap<ObjectId, GameObject>,
    passability: PassabilityMap,
    next_id: ObjectId,
}

impl Level {
    /// Create an empty level. The passability map starts all-impassable.
    pub fn new(size: GridSize, resolution: u32, time: Time) -> Self {
        Self {
            size,
            time,
            objects: BTreeMap::new(),
            passability: PassabilityMap::new(size, resolution),
            next_id: ObjectId(1),
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn resolution(&self) -> u32 {
        self.passability.resolution()
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn passability(&self) -> &PassabilityMap {
        &self.passability
    }

    /// Populate the level from saved records.
    ///
    /// Every record is resolved and built before anything is inserted, so an
    /// unknown type, a missing config or a bad record leaves the level exactly
    /// as it was. Returns the number of objects loaded.
    pub fn load(&mut self, data: &LevelData, configs: &ConfigTable) -> Result<usize> {
        let mut built = Vec::with_capacity(data.objects.len());
        for record in &data.objects {
            built.push(Self::build(record, configs)?);
        }

        let count = built.len();
        for object in built {
            self.insert(object);
        }

        debug!(count, total = self.objects.len(), "level loaded");
        Ok(count)
    }

    fn build(record: &ObjectRecord, configs: &ConfigTable) -> Result<GameObject> {
        let kind: ObjectType = record.kind.parse()?;
        let mut object = match kind {
            ObjectType::Character => GameObject::character(record.id, configs.character(record.config)?),
            ObjectType::Monster => GameObject::monster(record.id, configs.monster(record.config)?),
        };
        object.load(record)?;
        Ok(object)
    }

    fn insert(&mut self, object: GameObject) {
        let id = object.id();
        if id >= self.next_id {
            self.next_id = id.next();
        }
        if let Some(previous) = self.objects.insert(id, object) {
            warn!(%id, "duplicate object id, replacing existing object");
            previous.destroy();
        }
    }

    /// Serialize every object, ordered by id
    pub fn save(&self) -> LevelData {
        LevelData {
            objects: self.objects.values().map(GameObject::save).collect(),
        }
    }

    /// Create an object in code with the next free id.
    ///
    /// Monsters start walking their config's patrol, if it has one.
    pub fn spawn(
        &mut self,
        kind: ObjectType,
        config_id: u32,
        position: Vec2,
        configs: &ConfigTable,
    ) -> Result<ObjectId> {
        let id = self.allocate_id()?;
        let record = ObjectRecord::new(id, kind.as_str(), config_id, position);
        let mut object = Self::build(&record, configs)?;

        if kind == ObjectType::Monster {
            let patrol = &configs.monster(config_id)?.patrol;
            if !patrol.is_empty() {
                object
                    .component_mut::<MonsterMovementComponent>()?
                    .set_path(patrol.clone());
            }
        }

        debug!(%id, %kind, config_id, "object spawned");
        self.insert(object);
        Ok(id)
    }

    /// Next unused id. Once the counter has reached `u32::MAX` the lowest
    /// free id is handed out instead, so a spawn never replaces a live object.
    fn allocate_id(&self) -> Result<ObjectId> {
        if !self.objects.contains_key(&self.next_id) {
            return Ok(self.next_id);
        }

        let mut candidate = 1u32;
        for id in self.objects.keys() {
            if id.0 < candidate {
                continue;
            }
            if id.0 > candidate {
                break;
            }
            candidate = candidate.checked_add(1).ok_or(HearthError::IdSpaceExhausted)?;
        }
        Ok(ObjectId(candidate))
    }

    /// Look up an object; `None` for unknown or removed ids
    pub fn get_object(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.get(&id)
    }

    pub fn get_object_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(&id)
    }

    /// Look up an object, treating absence as an error
    pub fn object(&self, id: ObjectId) -> Result<&GameObject> {
        self.get_object(id).ok_or(HearthError::ObjectNotFound(id))
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Result<&mut GameObject> {
        self.get_object_mut(id).ok_or(HearthError::ObjectNotFound(id))
    }

    /// Destroy a single object
    pub fn remove_object(&mut self, id: ObjectId) -> Result<()> {
        let object = self
            .objects
            .remove(&id)
            .ok_or(HearthError::ObjectNotFound(id))?;
        object.destroy();
        Ok(())
    }

    /// Give a monster a new path to walk
    pub fn set_path(&mut self, id: ObjectId, path: Vec<Vec2>) -> Result<()> {
        self.object_mut(id)?
            .component_mut::<MonsterMovementComponent>()?
            .set_path(path);
        Ok(())
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn object_ids(&self) -> Vec<ObjectId> {
        self.objects.keys().copied().collect()
    }

    pub fn objects(&self) -> impl Iterator<Item = &GameObject> {
        self.objects.values()
    }

    /// Replace the passability grid; see [`PassabilityMap::set_tiles`]
    pub fn set_passable_tiles(&mut self, tiles: Vec<bool>) -> Result<()> {
        self.passability.set_tiles(tiles)?;
        debug!(
            passable = self.passability.passable_count(),
            total = self.passability.expected_len(),
            "passability updated"
        );
        Ok(())
    }

    pub fn is_passable_tile(&self, position: Vec2) -> bool {
        self.passability.is_passable(position)
    }

    /// Advance every object by one tick
    pub fn update(&mut self) {
        let ctx = TickContext {
            dt: self.time.tick_seconds(),
            passability: &self.passability,
        };
        for object in self.objects.values_mut() {
            object.update(&ctx);
        }
    }

    /// Draw list for every object that has a render binding
    pub fn render_snapshot(&self) -> Vec<RenderItem<'_>> {
        self.objects
            .values()
            .filter_map(|object| {
                let render = object.component::<RenderComponent>().ok()?;
                let transform = render.transform();
                let (animation, clip) = match object.component::<AnimationComponent>() {
                    Ok(a) => (a.state(), a.clip()),
                    Err(_) => (AnimationState::Idle, ""),
                };
                Some(RenderItem {
                    id: object.id(),
                    mesh: render.mesh(),
                    position: transform.position,
                    yaw: transform.yaw,
                    scale: transform.scale,
                    animation,
                    clip,
                })
            })
            .collect()
    }

    /// Destroy every object, then clear the registry
    pub fn destroy(&mut self) {
        let objects = std::mem::take(&mut self.objects);
        let count = objects.len();
        for (_, object) in objects {
            object.destroy();
        }
        debug!(count, "level destroyed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::MovementComponent;

    const CONFIGS: &str = r#"
[[character]]
id = 1
movement = { speed = 4.0 }
render = { mesh = "hero.glb" }

[[monster]]
id = 10
movement = { speed = 2.0 }
render = { mesh = "slime.glb" }
patrol = [{ x = 5.0, y = 2.0 }, { x = 5.0, y = 6.0 }]
"#;

    fn configs() -> ConfigTable {
        ConfigTable::from_toml_str(CONFIGS).unwrap()
    }

    fn open_level() -> Level {
        let mut level = Level::new(GridSize::new(10, 10), 4, Time::from_rate(10));
        level.set_passable_tiles(vec![true; 1600]).unwrap();
        level
    }

    fn sample_data() -> LevelData {
        LevelData {
            objects: vec![
                ObjectRecord::new(1, "character", 1, Vec2::new(5.0, 5.0)).with_direction(0.0),
                ObjectRecord::new(7, "monster", 10, Vec2::new(1.0, 1.0))
                    .with_direction(3.0)
                    .with_path(vec![Vec2::new(1.0, 1.0), Vec2::new(4.0, 1.0)], 1),
            ],
        }
    }

    #[test]
    fn test_load_and_get() {
        let mut level = open_level();
        let loaded = level.load(&sample_data(), &configs()).unwrap();

        assert_eq!(loaded, 2);
        assert_eq!(level.object_count(), 2);
        assert_eq!(level.object_ids(), vec![ObjectId(1), ObjectId(7)]);

        let hero = level.get_object(ObjectId(1)).unwrap();
        assert_eq!(hero.kind(), ObjectType::Character);
        assert_eq!(hero.position(), Vec2::new(5.0, 5.0));

        let slime = level.get_object(ObjectId(7)).unwrap();
        assert_eq!(slime.kind(), ObjectType::Monster);
        assert_eq!(slime.direction(), 3.0);

        assert!(level.get_object(ObjectId(99)).is_none());
        assert!(matches!(
            level.object(ObjectId(99)),
            Err(HearthError::ObjectNotFound(ObjectId(99)))
        ));
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut level = open_level();
        level.load(&sample_data(), &configs()).unwrap();
        for _ in 0..3 {
            level.update();
        }

        let saved = level.save();
        let mut restored = open_level();
        restored.load(&saved, &configs()).unwrap();

        assert_eq!(restored.save(), saved);
        for id in level.object_ids() {
            let a = level.get_object(id).unwrap();
            let b = restored.get_object(id).unwrap();
            assert_eq!(a.position(), b.position());
            assert_eq!(a.direction(), b.direction());
            assert_eq!(a.kind(), b.kind());
            assert_eq!(a.config_id(), b.config_id());
        }
    }

    #[test]
    fn test_unknown_type_fails_without_partial_load() {
        let mut level = open_level();
        level.load(&sample_data(), &configs()).unwrap();

        let data = LevelData {
            objects: vec![
                ObjectRecord::new(20, "character", 1, Vec2::new(2.0, 2.0)),
                ObjectRecord::new(21, "dragon", 1, Vec2::new(3.0, 3.0)),
            ],
        };
        let err = level.load(&data, &configs()).unwrap_err();

        assert!(matches!(err, HearthError::UnknownObjectType(t) if t == "dragon"));
        assert_eq!(level.object_count(), 2);
        assert!(level.get_object(ObjectId(20)).is_none());
    }

    #[test]
    fn test_missing_config_fails() {
        let mut level = open_level();
        let data = LevelData {
            objects: vec![ObjectRecord::new(1, "monster", 1, Vec2::ZERO)],
        };
        assert!(matches!(
            level.load(&data, &configs()),
            Err(HearthError::ConfigNotFound { id: 1, .. })
        ));
        assert_eq!(level.object_count(), 0);
    }

    #[test]
    fn test_duplicate_id_overwrites() {
        let mut level = open_level();
        let data = LevelData {
            objects: vec![
                ObjectRecord::new(3, "character", 1, Vec2::new(1.0, 1.0)),
                ObjectRecord::new(3, "monster", 10, Vec2::new(2.0, 2.0)),
            ],
        };
        level.load(&data, &configs()).unwrap();

        assert_eq!(level.object_count(), 1);
        let object = level.get_object(ObjectId(3)).unwrap();
        assert_eq!(object.kind(), ObjectType::Monster);
        assert_eq!(object.position(), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_spawn_assigns_fresh_ids_and_patrol() {
        let mut level = open_level();
        level.load(&sample_data(), &configs()).unwrap();

        let hero = level
            .spawn(ObjectType::Character, 1, Vec2::new(2.0, 2.0), &configs())
            .unwrap();
        let slime = level
            .spawn(ObjectType::Monster, 10, Vec2::new(5.0, 1.0), &configs())
            .unwrap();

        assert_eq!(hero, ObjectId(8));
        assert_eq!(slime, ObjectId(9));

        let movement = level
            .get_object(slime)
            .unwrap()
            .component::<MonsterMovementComponent>()
            .unwrap();
        assert!(movement.is_moving());
        assert_eq!(movement.path().len(), 2);

        assert!(level
            .spawn(ObjectType::Monster, 99, Vec2::ZERO, &configs())
            .is_err());
        assert_eq!(level.object_count(), 4);
    }

    #[test]
    fn test_spawn_after_max_id_keeps_existing_object() {
        let mut level = open_level();
        let data = LevelData {
            objects: vec![
                ObjectRecord::new(1, "character", 1, Vec2::new(2.0, 2.0)),
                ObjectRecord::new(u32::MAX, "character", 1, Vec2::new(1.0, 1.0)),
            ],
        };
        level.load(&data, &configs()).unwrap();

        let spawned = level
            .spawn(ObjectType::Character, 1, Vec2::new(3.0, 3.0), &configs())
            .unwrap();

        assert_eq!(spawned, ObjectId(2));
        assert_eq!(level.object_count(), 3);
        assert_eq!(
            level.object(ObjectId(u32::MAX)).unwrap().position(),
            Vec2::new(1.0, 1.0)
        );
        assert_eq!(level.object(spawned).unwrap().position(), Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_update_moves_monster_along_path() {
        let mut level = open_level();
        level.load(&sample_data(), &configs()).unwrap();

        // 10 Hz, speed 2.0 -> 0.2 units per tick toward (4, 1)
        level.update();
        let slime = level.get_object(ObjectId(7)).unwrap();
        assert!((slime.position().x - 1.2).abs() < 1e-5);
        assert_eq!(slime.position().y, 1.0);
    }

    #[test]
    fn test_character_blocked_by_map() {
        let mut level = Level::new(GridSize::new(4, 4), 1, Time::from_rate(4));
        let mut tiles = vec![true; 16];
        tiles[2 + 4] = false; // tile (2, 1)
        level.set_passable_tiles(tiles).unwrap();
        level
            .load(
                &LevelData {
                    objects: vec![ObjectRecord::new(1, "character", 1, Vec2::new(1.5, 1.5))],
                },
                &configs(),
            )
            .unwrap();

        let hero = level.get_object_mut(ObjectId(1)).unwrap();
        hero.component_mut::<MovementComponent>()
            .unwrap()
            .set_axis(Vec2::new(1.0, 0.0));

        // Speed 4 at 4 Hz steps onto (2.5, 1.5), inside the wall tile
        level.update();
        let hero = level.get_object(ObjectId(1)).unwrap();
        assert_eq!(hero.position(), Vec2::new(1.5, 1.5));
        assert_eq!(hero.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_passability_delegation() {
        let mut level = Level::new(GridSize::new(2, 2), 2, Time::default());
        assert!(!level.is_passable_tile(Vec2::new(0.5, 0.5)));

        assert!(matches!(
            level.set_passable_tiles(vec![true; 4]),
            Err(HearthError::PassabilitySizeMismatch { expected: 16, got: 4 })
        ));
        level.set_passable_tiles(vec![true; 16]).unwrap();
        assert!(level.is_passable_tile(Vec2::new(0.5, 0.5)));
        assert!(!level.is_passable_tile(Vec2::new(-0.5, 0.5)));
    }

    #[test]
    fn test_render_snapshot() {
        let mut level = open_level();
        level.load(&sample_data(), &configs()).unwrap();

        let items = level.render_snapshot();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].mesh, "hero.glb");
        assert_eq!(items[0].position, Vec3::new(5.0, 0.0, 5.0));
        assert_eq!(items[0].animation, AnimationState::Idle);
        assert_eq!(items[0].clip, "idle");
        assert_eq!(items[1].mesh, "slime.glb");
    }

    #[test]
    fn test_remove_and_destroy() {
        let mut level = open_level();
        level.load(&sample_data(), &configs()).unwrap();

        level.remove_object(ObjectId(1)).unwrap();
        assert!(level.get_object(ObjectId(1)).is_none());
        assert!(matches!(
            level.remove_object(ObjectId(1)),
            Err(HearthError::ObjectNotFound(_))
        ));

        level.destroy();
        assert_eq!(level.object_count(), 0);
        assert!(level.get_object(ObjectId(7)).is_none());
    }

    #[test]
    fn test_set_path_requires_monster() {
        let mut level = open_level();
        level.load(&sample_data(), &configs()).unwrap();

        level.set_path(ObjectId(7), vec![Vec2::new(9.0, 9.0)]).unwrap();
        assert!(matches!(
            level.set_path(ObjectId(1), vec![Vec2::ZERO]),
            Err(HearthError::ComponentNotFound(_))
        ));
        assert!(matches!(
            level.set_path(ObjectId(50), vec![Vec2::ZERO]),
            Err(HearthError::ObjectNotFound(_))
        ));
    }
}
