mod find_authority;
mod load_zones;

pub use find_authority::FindAuthorityUseCase;
pub use load_zones::LoadZonesUseCase;
