pub mod competition_counts;
#[allow(dead_code)]
pub mod connected_candidate;
#[allow(dead_code)]
pub mod connections;
pub mod nearby_candidate;
pub mod provider;
pub mod user_counts;
#[allow(dead_code)]
pub mod users;

pub use competition_counts::CompetitionCountsRow;
pub use connected_candidate::ConnectedCandidateRow;
pub use connections::{ConnectionRow, PairCountsRow};
pub use nearby_candidate::NearbyCandidateRow;
pub use provider::{Provider, UnsupportedProvider};
pub use user_counts::UserCounts;
pub use users::UsersRow;
