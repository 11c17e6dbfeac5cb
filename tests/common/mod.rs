use std::path::PathBuf;

use rusqlite::Connection;
use tempfile::TempDir;

const FIXTURE_SQL: &str = "
    CREATE TABLE Stations (Station_ID INTEGER PRIMARY KEY, Station_Name TEXT NOT NULL);
    CREATE TABLE Stops (
        Stop_ID INTEGER PRIMARY KEY,
        Station_ID INTEGER NOT NULL,
        Stop_Name TEXT NOT NULL,
        Direction TEXT NOT NULL,
        ADA INTEGER NOT NULL,
        Latitude REAL NOT NULL,
        Longitude REAL NOT NULL
    );
    CREATE TABLE Lines (Line_ID INTEGER PRIMARY KEY, Color TEXT NOT NULL);
    CREATE TABLE StopDetails (Stop_ID INTEGER NOT NULL, Line_ID INTEGER NOT NULL);
    CREATE TABLE Ridership (
        Station_ID INTEGER NOT NULL,
        Ride_Date TEXT NOT NULL,
        Type_Of_Day TEXT NOT NULL,
        Num_Riders INTEGER NOT NULL
    );

    INSERT INTO Stations VALUES
        (40380, 'Clark/Lake'), (40260, 'State/Lake'), (40890, 'O''Hare Airport'),
        (41320, 'Belmont-North Main'), (40730, 'Washington/Wells');
    INSERT INTO Lines VALUES (1, 'Red'), (2, 'Blue'), (3, 'Brown'), (4, 'Purple');
    INSERT INTO Stops VALUES
        (30374, 40380, 'Clark/Lake (Blue-O''Hare)', 'N', 1, 41.885737, -87.630886),
        (30375, 40380, 'Clark/Lake (Blue-Forest Park)', 'S', 1, 41.885737, -87.630886),
        (30050, 40260, 'State/Lake (Loop-Inner)', 'W', 0, 41.88574, -87.627835),
        (30171, 40890, 'O''Hare (Forest Park-bound)', 'S', 1, 41.97766, -87.904223),
        (30255, 41320, 'Belmont (Red-Howard)', 'N', 1, 41.939751, -87.65338),
        (30256, 41320, 'Belmont (Brown-Kimball)', 'N', 1, 41.939751, -87.65338),
        (30141, 40730, 'Washington/Wells (Outer Loop)', 'N', 1, 41.882695, -87.63378);
    INSERT INTO StopDetails VALUES
        (30374, 2), (30375, 2), (30050, 3), (30050, 4), (30171, 2),
        (30255, 1), (30256, 3), (30141, 3);
    INSERT INTO Ridership VALUES
        (40380, '2020-12-31 00:00:00', 'W', 4000),
        (40380, '2021-01-01 00:00:00', 'U', 1200),
        (40380, '2021-01-02 00:00:00', 'A', 2100),
        (40380, '2021-01-04 00:00:00', 'W', 5300),
        (40380, '2021-03-01 00:00:00', 'W', 6100),
        (40260, '2021-01-04 00:00:00', 'W', 2400),
        (40260, '2021-03-01 00:00:00', 'W', 2600),
        (40890, '2021-01-01 00:00:00', 'U', 3000),
        (40890, '2021-01-04 00:00:00', 'W', 7000);
";

/// Write the fixture network to a SQLite file inside `dir`.
#[allow(dead_code)]
pub fn create_test_db(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("cta_test.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(FIXTURE_SQL).unwrap();
    path
}
