use crate::ship::ShipClass;

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;
pub const STANDARD_FLEET: [ShipClass; 5] = [
    ShipClass::new("Aircraft Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Destroyer", 3),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Patrol Boat", 2),
];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Upper bound on shots in a simulated game before it is abandoned.
pub const MAX_TURNS: usize = DEFAULT_ROWS * DEFAULT_COLS;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "BATTLESHIP_LOG";
