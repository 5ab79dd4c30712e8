use swarmsong::flock::agent::{SIZE_RANGE, SPAWN_EXTENT};
use swarmsong::flock::swarm::{FlockParams, Swarm};

#[test]
fn initialize_yields_exact_count_with_valid_agents() {
    for &n in &[5usize, 20, 57, 100] {
        let params = FlockParams {
            total_agents: n,
            ..FlockParams::default()
        };
        let swarm = Swarm::new(params, n as u64);
        assert_eq!(swarm.agents.len(), n);
        for agent in &swarm.agents {
            assert!((agent.orientation.length() - 1.0).abs() < 1e-5, "orientation must be unit");
            assert!(agent.size >= SIZE_RANGE.0 && agent.size < SIZE_RANGE.1);
            assert!(agent.position.abs().max_element() <= SPAWN_EXTENT);
            assert!(agent.interest.is_none());
        }
    }
}

#[test]
fn out_of_range_count_is_clamped_not_faulted() {
    let params = FlockParams {
        total_agents: 0,
        ..FlockParams::default()
    };
    let mut swarm = Swarm::new(params, 1);
    assert_eq!(swarm.agents.len(), 5, "count clamps to the range minimum");

    swarm.params.total_agents = 100_000;
    swarm.tick(0.016);
    assert_eq!(swarm.agents.len(), 100, "count clamps to the range maximum");
}

#[test]
fn same_seed_spawns_identical_flock() {
    let a = Swarm::new(FlockParams::default(), 77);
    let b = Swarm::new(FlockParams::default(), 77);
    for (x, y) in a.agents.iter().zip(b.agents.iter()) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.orientation, y.orientation);
        assert_eq!(x.size, y.size);
    }
}
