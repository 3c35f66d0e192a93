/// Error codes with category prefix
///
/// Categories:
/// - NET: Network connectivity errors
/// - API: Admin API errors
/// - AUT: Login / token exchange errors
/// - SES: Stored session errors
/// - IO: File system operations
/// - CFG: Session file parsing
/// - VAL: Input validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Network errors (NET001-NET099)
    /// Connection failed
    Net001,
    /// Request timeout
    Net002,

    // API errors (API001-API099)
    /// Unauthorized (401)
    Api001,
    /// Forbidden (403)
    Api002,
    /// Resource not found
    Api003,
    /// Server error (5xx)
    Api004,
    /// Malformed response body
    Api005,
    /// Other non-success status
    Api006,

    // Auth errors (AUT001-AUT099)
    /// Credentials rejected
    Aut001,

    // Session errors (SES001-SES099)
    /// No stored session
    Ses001,
    /// Stored session expired
    Ses002,

    // I/O errors (IO001-IO099)
    /// File operation failed
    Io001,
    /// Permission denied
    Io002,

    // Config errors (CFG001-CFG099)
    /// Invalid session file format
    Cfg001,

    // Validation errors (VAL001-VAL099)
    /// Invalid argument
    Val001,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "NET001")
    pub fn as_str(&self) -> &'static str {
        match self {
            // Network
            ErrorCode::Net001 => "NET001",
            ErrorCode::Net002 => "NET002",
            // API
            ErrorCode::Api001 => "API001",
            ErrorCode::Api002 => "API002",
            ErrorCode::Api003 => "API003",
            ErrorCode::Api004 => "API004",
            ErrorCode::Api005 => "API005",
            ErrorCode::Api006 => "API006",
            // Auth
            ErrorCode::Aut001 => "AUT001",
            // Session
            ErrorCode::Ses001 => "SES001",
            ErrorCode::Ses002 => "SES002",
            // I/O
            ErrorCode::Io001 => "IO001",
            ErrorCode::Io002 => "IO002",
            // Config
            ErrorCode::Cfg001 => "CFG001",
            // Validation
            ErrorCode::Val001 => "VAL001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            // Network
            ErrorCode::Net001 => "Unable to establish network connection to the tenant API",
            ErrorCode::Net002 => "The request timed out while waiting for a response",
            // API
            ErrorCode::Api001 => "The session token was rejected by the server",
            ErrorCode::Api002 => "The account is not allowed to access this resource",
            ErrorCode::Api003 => "The requested resource was not found",
            ErrorCode::Api004 => "The server encountered an internal error",
            ErrorCode::Api005 => "The server returned a response that could not be parsed",
            ErrorCode::Api006 => "The server rejected the request",
            // Auth
            ErrorCode::Aut001 => "The username, password or subdomain was rejected",
            // Session
            ErrorCode::Ses001 => "No saved session was found",
            ErrorCode::Ses002 => "The saved session token has expired",
            // I/O
            ErrorCode::Io001 => "Reading or writing the session file failed",
            ErrorCode::Io002 => "Permission denied when accessing the session file",
            // Config
            ErrorCode::Cfg001 => "The session file has an invalid format",
            // Validation
            ErrorCode::Val001 => "An invalid argument was provided",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            // Network
            ErrorCode::Net001 => "1. Check your internet connection\n2. Verify the subdomain and OXADM_API_DOMAIN\n3. Try again later if the server is down",
            ErrorCode::Net002 => "1. Check your internet connection speed\n2. Try again with a longer OXADM_TIMEOUT\n3. The server may be overloaded, try later",
            // API
            ErrorCode::Api001 => "1. Run 'oxadm login' again\n2. Check that the account is still active",
            ErrorCode::Api002 => "1. Verify the account permissions\n2. Ask the tenant administrator for access",
            ErrorCode::Api003 => "1. Verify the subdomain is correct\n2. Check OXADM_API_DOMAIN",
            ErrorCode::Api004 => "1. Wait a few minutes and retry\n2. Report the issue if it persists",
            ErrorCode::Api005 => "1. Retry the command\n2. Run with --verbose and report the issue",
            ErrorCode::Api006 => "1. Check the command arguments\n2. Run with --verbose for details",
            // Auth
            ErrorCode::Aut001 => "1. Verify your username and password\n2. Check the subdomain spelling\n3. Ensure the account is not locked",
            // Session
            ErrorCode::Ses001 => "1. Run 'oxadm login --subdomain <tenant> --username <user>'",
            ErrorCode::Ses002 => "1. Run 'oxadm login' to obtain a fresh token",
            // I/O
            ErrorCode::Io001 => "1. Verify OXADM_SESSION_FILE points to a writable location\n2. Check free disk space",
            ErrorCode::Io002 => "1. Check file/directory permissions\n2. Verify ownership of the session file",
            // Config
            ErrorCode::Cfg001 => "1. Run 'oxadm logout' to remove the broken file\n2. Log in again",
            // Validation
            ErrorCode::Val001 => "1. Check the argument format\n2. Use 'oxadm --help' for usage information",
        }
    }
}
