// External integrations: VDO.Ninja link generation.

pub mod vdo_ninja;
