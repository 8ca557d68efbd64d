//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Rich editor configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[editor]
# placeholder = ""
# line_height = 28        # 8-200 px
# editing_enabled = true
# initial_html = ""

[appearance]
# text_color = "#666666"  # baked into the page at load time
# background_color = "#ffffff"
# font_size = 16          # 6-96 px

[bridge]
# did_load_delay_ms = 500 # 0-10000
# script_timeout_ms = 5000 # 100-60000
# assets_dir = "assets"

[window]
# title = "Rich Editor"
# width = 900
# height = 700
# devtools = false

[logging]
# level = "info"          # trace, debug, info, warn, error
"##
    .to_string()
}
