mod seed_root_hints;

pub use seed_root_hints::SeedRootHintsUseCase;
