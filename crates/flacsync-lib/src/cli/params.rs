use crate::config::MirrorConfig;

#[derive(Debug, Clone)]
pub struct MirrorParams {
    pub config: MirrorConfig,
}

#[derive(Debug, Clone)]
pub struct ListParams {
    pub config: MirrorConfig,
}
