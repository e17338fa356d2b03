use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidJson, "Invalid JSON format.");
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });

// Record validation.
define_client_error!(
    InvalidAttendanceType,
    "Invalid attendance type: '{value}'. Expected one of office-visit, sick, pto, event, holiday.",
    { value: &str }
);
define_client_error!(
    InvalidAttendanceDate,
    "Invalid attendance date: '{date}'.",
    { date: &str }
);
