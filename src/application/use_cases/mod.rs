/// Use cases module containing application business logic orchestration
mod compare_manifests;

pub use compare_manifests::CompareManifestsUseCase;
