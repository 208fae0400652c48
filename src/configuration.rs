use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::Manager;
use crate::profile::scenario::FlareScenario;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    scenarios: Vec<serde_json::Value>
}

pub struct Configuration {
    scenario_manager_cell: RefCell<Manager<FlareScenario>>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            scenario_manager_cell: RefCell::new(Manager::new(FlareScenario::from_json))
        }
    }

    pub fn scenario_manager(&self) -> RefMut<'_, Manager<FlareScenario>> {
        self.scenario_manager_cell.borrow_mut()
    }

    pub fn from_reader(&self, file_path: String) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        let scenario_manager = self.scenario_manager_cell.borrow_mut();
        scenario_manager.insert_obj_from_json_vec(&json_prop.scenarios)?;
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
