// Policy constants (No magic values)

/// Platform versions below this get an explicit native modules stack size
/// (their default thread stack is too small for native module work)
pub const LEGACY_PLATFORM_VERSION_THRESHOLD: u32 = 21;

/// Native modules stack size on legacy platforms (2,000,000 bytes)
pub const LEGACY_STACK_SIZE_BYTES: u64 = 2_000_000;

/// Platform version assumed when it cannot be detected
/// Never triggers the legacy override
pub const UNKNOWN_PLATFORM_VERSION: u32 = u32::MAX;

/// Development server port when none is given
pub const DEFAULT_SERVER_PORT: &str = "8081";

/// Fingerprint marker of VirtualBox-based emulators (e.g. Genymotion)
pub const ALTERNATE_VIRTUALIZATION_MARKER: &str = "vbox";

/// Fingerprint marker of the stock emulator
pub const STOCK_EMULATOR_MARKER: &str = "generic";

/// Host loopback alias inside VirtualBox-based emulators
pub const ALTERNATE_VIRTUALIZATION_HOST: &str = "10.0.3.2";

/// Host loopback alias inside the stock emulator
pub const STOCK_EMULATOR_HOST: &str = "10.0.2.2";

/// Host of the development server on a physical device (port forwarded)
pub const DEVICE_HOST: &str = "localhost";

/// Separator between role tag and server domain in thread names
pub const THREAD_NAME_DOMAIN_SEPARATOR: char = '_';

/// Separator before the server port in thread names
pub const THREAD_NAME_PORT_SEPARATOR: char = ':';
