use swarmsong::flock::swarm::{FlockParams, Swarm};

#[test]
fn links_never_change_once_set() {
    let mut swarm = Swarm::new(FlockParams::default(), 5);
    let n = swarm.agents.len();
    let mut locked: Vec<Option<usize>> = vec![None; n];

    for _ in 0..300 {
        swarm.tick(0.016);
        for (i, agent) in swarm.agents.iter().enumerate() {
            match (locked[i], agent.interest) {
                (None, Some(j)) => locked[i] = Some(j),
                (Some(prev), now) => {
                    assert_eq!(now, Some(prev), "agent {i} changed its interest link");
                }
                (None, None) => {}
            }
        }
    }
}

#[test]
fn link_points_at_strictly_larger_agent_within_band() {
    let mut swarm = Swarm::new(FlockParams::default(), 6);
    for _ in 0..50 {
        swarm.tick(0.016);
    }
    for (i, agent) in swarm.agents.iter().enumerate() {
        if let Some(j) = agent.interest {
            let diff = swarm.agents[j].size - swarm.agents[i].size;
            assert!(diff > 0.0 && diff < 0.1, "agent {i} link violates the size band");
            assert!(j > i, "links only form toward later agents");
        }
    }
}

#[test]
fn band_boundaries_are_excluded() {
    let mut swarm = Swarm::new(
        FlockParams {
            total_agents: 5,
            ..FlockParams::default()
        },
        8,
    );
    // Equal sizes (diff == 0) and exactly band-width apart (diff == 0.1,
    // exact because the base size is 0) must both fail the strict comparisons.
    let sizes = [0.0f32, 0.1, 0.5, 0.5, 0.95];
    for (agent, &s) in swarm.agents.iter_mut().zip(sizes.iter()) {
        agent.size = s;
        agent.interest = None;
    }
    swarm.resolve_interest();
    assert_eq!(swarm.agents[0].interest, None, "diff exactly 0.1 is excluded");
    assert_eq!(swarm.agents[2].interest, None, "diff 0.0 is excluded");
}
