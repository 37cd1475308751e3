// Domain layer: typed datastore records and the ports (storage, config, commands).

pub mod model;
pub mod ports;
