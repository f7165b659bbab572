//! Shared Tailwind class constants so the auth forms stay visually
//! consistent.

pub struct Theme;

impl Theme {
    /// Form column next to the side illustration.
    pub const FORM_PANEL: &'static str = "px-6 py-10 md:px-14 lg:px-20 w-full flex flex-col justify-center";

    pub const FORM: &'static str = "mt-6 w-full flex flex-col space-y-4";

    pub const TITLE: &'static str = "text-2xl font-bold";

    pub const SUBTITLE: &'static str = "text-gray-500 mt-1";

    pub const FIELDSET: &'static str = "space-y-1 flex flex-col items-start justify-start";

    pub const INPUT: &'static str = "w-full rounded-md border border-gray-500/50 text-sm py-3 px-3 outline-none focus:border-none focus:ring-2 focus:ring-primary transition-all duration-300 ease-in-out";

    /// Inline message rendered under a field.
    pub const FIELD_ERROR: &'static str = "text-red-500 text-sm mt-1";

    /// Eye toggle placed inside password inputs.
    pub const VISIBILITY_TOGGLE: &'static str = "absolute right-3 top-1/2 transform -translate-y-1/2 text-gray-500 text-sm";

    pub const PRIMARY_BUTTON: &'static str = "mt-2 py-3 rounded-full text-white w-full text-center flex items-center justify-center bg-primary hover:bg-primary/90";

    pub const PRIMARY_BUTTON_DISABLED: &'static str = "mt-2 py-3 rounded-full text-white w-full text-center flex items-center justify-center bg-gray-400 cursor-not-allowed";

    pub const LINK: &'static str = "text-primary";

    pub const BACK_LINK: &'static str = "font-bold flex flex-row items-center space-x-1 border border-black p-2 rounded-md mb-6 cursor-pointer max-w-20";

    pub const CHIP_OK: &'static str = "px-3 py-1 rounded-full text-sm flex border items-center gap-2 bg-green-100 text-green-700 border-green-500";

    pub const CHIP_PENDING: &'static str = "px-3 py-1 rounded-full text-sm flex border items-center gap-2 bg-red-100 text-red-700 border-red-400";
}
