use std::cell::{
    RefCell,
    RefMut
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;

use super::managererror::ManagerError;

/// 以名稱為鍵的物件管理器。元素由 JSON 解析函數產生，
/// 解析函數由建構端注入。
pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}

#[derive(Deserialize)]
struct NamedJsonObject {
    name: String
}

impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager { map_cell: RefCell::new(HashMap::new()), get_obj_from_json }
    }

    pub fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    pub fn get(&self, name: &String) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name).map_or(
            Err(ManagerError::NameNotFound(name.to_owned())),
            |elem| Ok(elem.clone())
        )
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject =
            ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        self.map().insert(named_object.name, v);
        Ok(())
    }

    pub fn insert_obj_from_json_vec(&self, json_vec: &Vec<serde_json::Value>) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    pub fn from_reader(&self, file_path: String) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> =
                ManagerError::from_json_or_json_parse_error(json_value)?;
            self.insert_obj_from_json_vec(&json_array)?;
        } else {
            self.insert_obj_from_json(json_value)?;
        }
        Ok(())
    }
}
