use crate::ecs::World;

/// Count down every active invulnerability window by one tick.
///
/// Runs after collision, so an entity hit this tick already loses one
/// frame of its window before the next collision pass.
pub fn run(world: &mut World) {
    for im in world.iframes.iter_mut().flatten() {
        if im.cur > 0 {
            im.cur -= 1;
        }
    }
}
