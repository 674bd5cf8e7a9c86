pub mod election_convergence;
pub mod follower_failure;
pub mod leader_failover;
pub mod single_node;
