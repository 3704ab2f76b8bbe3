//! Shared brokerage roster for unit tests.
//!
//! MNG-1 (Mia) runs AGT-1 and AGT-2, MNG-2 (Noor) runs AGT-4, and AGT-3
//! has no manager. AGT-4 owns nothing.

use crate::model::{Agent, CurrentUser, Manager, Property, Role};

use super::engine::{LinkageEngine, LinkageInputs};

pub fn properties() -> Vec<Property> {
    vec![
        Property::new("PROP-1", "Harbor Loft", "AGT-1"),
        Property::new("PROP-2", "Cedar House", "AGT-2"),
        Property::new("PROP-3", "Mill Court", "AGT-3"),
        Property::new("PROP-4", "Elm Terrace", "AGT-2"),
    ]
}

pub fn agents() -> Vec<Agent> {
    vec![
        Agent::new("AGT-1", "Al").managed_by("MNG-1"),
        Agent::new("AGT-2", "Bea").managed_by("MNG-1"),
        Agent::new("AGT-3", "Cy"),
        Agent::new("AGT-4", "Dee").managed_by("MNG-2"),
    ]
}

pub fn managers() -> Vec<Manager> {
    vec![Manager::new("MNG-1", "Mia"), Manager::new("MNG-2", "Noor")]
}

pub fn admin() -> CurrentUser {
    CurrentUser::new(Role::Admin, "ADM-1", "Ada")
}

pub fn engine_for(user: &CurrentUser) -> LinkageEngine {
    let properties = properties();
    let agents = agents();
    let managers = managers();
    LinkageEngine::new(&LinkageInputs {
        properties: &properties,
        agents: &agents,
        managers: &managers,
        user,
        loading: crate::model::LoadingFlags::default(),
    })
}

pub fn admin_engine() -> LinkageEngine {
    engine_for(&admin())
}
