//! Static pages of the setup portal

pub(super) const CONFIG_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Web2Wire Setup</title>
  <style>
    body { font-family: monospace; background: #0d0d0d; color: #00ff00; margin: 0; padding: 20px; }
    .panel { max-width: 380px; margin: 48px auto 0; padding: 24px; border: 2px solid #00ccff; border-radius: 8px; background: #1a1a1a; }
    h1 { text-align: center; font-size: 1.4em; }
    label { display: block; margin-top: 12px; color: #00ccff; }
    input[type=text], input[type=password] { width: 100%; box-sizing: border-box; padding: 10px; margin: 6px 0 14px; background: #111; color: #00ff00; border: 1px solid #00ccff; border-radius: 4px; }
    input[type=submit] { width: 100%; padding: 12px; background: #00ff00; color: #111; border: none; border-radius: 4px; font-weight: bold; cursor: pointer; }
    .note { margin-top: 20px; text-align: center; color: #999; font-size: 0.85em; }
  </style>
</head>
<body>
  <div class="panel">
    <h1>WEB2WIRE NETWORK SETUP</h1>
    <form method="get" action="/save">
      <label for="ssid">Network name (SSID)</label>
      <input type="text" id="ssid" name="ssid" maxlength="32" required>
      <label for="pass">Password</label>
      <input type="password" id="pass" name="pass" maxlength="64">
      <input type="submit" value="SAVE AND RESTART">
    </form>
    <div class="note">Credentials are stored in the device flash.</div>
  </div>
</body>
</html>
"#;

pub(super) const SAVED_PAGE: &str = "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Saved</title></head>\
<body style=\"background:#0d0d0d;color:#00ff00;font-family:monospace;text-align:center;padding-top:100px\">\
<h1>CREDENTIALS SAVED</h1><p>The device restarts and joins the network in a few seconds.</p></body></html>";

pub(super) const MISSING_SSID_PAGE: &str = "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Error</title></head>\
<body style=\"background:#0d0d0d;color:red;font-family:monospace;text-align:center;padding-top:100px\">\
<h1>INPUT REJECTED</h1><p>The network name cannot be empty. <a href=\"/\" style=\"color:#00ccff\">Try again</a>.</p></body></html>";

pub(super) const INVALID_INPUT_PAGE: &str = "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Error</title></head>\
<body style=\"background:#0d0d0d;color:red;font-family:monospace;text-align:center;padding-top:100px\">\
<h1>INPUT REJECTED</h1><p>Network name or password is too long or badly encoded. <a href=\"/\" style=\"color:#00ccff\">Try again</a>.</p></body></html>";

pub(super) const STORAGE_ERROR_PAGE: &str = "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Error</title></head>\
<body style=\"background:#0d0d0d;color:red;font-family:monospace;text-align:center;padding-top:100px\">\
<h1>SAVE FAILED</h1><p>Credentials could not be written to flash.</p></body></html>";
