pub mod sampler;
pub mod trainer;

pub use sampler::GenerateLaunch;
pub use trainer::TrainerLaunch;
