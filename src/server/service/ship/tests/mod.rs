
use hangar_test_utils::prelude::*;

use crate::server::{
    error::{
        ship::{ShipError, ShipField},
        Error,
    },
    service::ship::ShipService,
};
