//! In-memory stores shared by unit tests.

use rusqlite::Connection;

use super::Database;

const SCHEMA: &str = "
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
";

const SAMPLE_ROWS: &str = "
    INSERT INTO Stations VALUES
        (1, 'Clark/Lake'), (2, 'State/Lake'), (3, 'Lake'), (4, 'O''Hare'),
        (5, 'Belmont-North Main'), (6, 'Belmont-O''Hare Branch');
    INSERT INTO Lines VALUES (1, 'Red'), (2, 'Blue'), (3, 'Brown');
    INSERT INTO Stops VALUES
        (10, 1, 'Clark/Lake (Blue-O''Hare)', 'N', 1, 41.885737, -87.630886),
        (11, 1, 'Clark/Lake (Loop-Outer)', 'E', 1, 41.885737, -87.630886),
        (20, 2, 'State/Lake (Loop-Inner)', 'W', 0, 41.88574, -87.627835),
        (40, 4, 'O''Hare (Terminal)', 'S', 1, 41.97766, -87.904223),
        (50, 5, 'Belmont (Red-Howard)', 'N', 1, 41.939751, -87.65338),
        (51, 5, 'Belmont (Red-95th)', 'S', 1, 41.939751, -87.65338);
    INSERT INTO StopDetails VALUES (10, 2), (11, 3), (20, 3), (40, 2), (50, 1), (51, 1);
    INSERT INTO Ridership VALUES
        (1, '2020-01-02 00:00:00', 'W', 1000),
        (1, '2020-01-04 00:00:00', 'A', 400),
        (1, '2020-01-05 00:00:00', 'U', 200),
        (1, '2021-01-04 00:00:00', 'W', 1500),
        (1, '2021-02-06 00:00:00', 'A', 300),
        (2, '2021-01-04 00:00:00', 'W', 500),
        (2, '2021-01-05 00:00:00', 'W', 700),
        (2, '2021-02-06 00:00:00', 'A', 100),
        (4, '2021-01-04 00:00:00', 'W', 2000),
        (4, '2021-02-06 00:00:00', 'A', 800);
";

pub(crate) fn schema_only() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    conn
}

pub(crate) fn sample_database() -> Database {
    let conn = schema_only();
    conn.execute_batch(SAMPLE_ROWS).unwrap();
    Database::from_connection(conn)
}
