//! Inline scripts baked into generated markup: the click tracker, the
//! localStorage auto-updater, and the postMessage bridge that carries
//! updates into `data:` iframes.
//!
//! Everything emitted here runs in a page this compiler does not control,
//! so the scripts are IIFE-wrapped, null-guard every DOM lookup, and
//! swallow storage errors (private-mode browsers throw on access).

use crate::config::{CompileOptions, WidgetConfig};

/// Message discriminator for the iframe bridge.
const UPDATE_MESSAGE_TYPE: &str = "cta-widget-update";

/// The field-to-DOM patch table plus its interpreter, shared verbatim by
/// the auto-updater and the in-frame listener. Patching is driven by the
/// table rather than per-field code so the two consumers cannot drift:
/// each entry names a record key, the id-scoped class the value lands on,
/// and how it is applied.
fn patch_runtime() -> &'static str {
    r#"var FIELDS = [
        { key: 'productTitle', cls: 'cta-title-', kind: 'text' },
        { key: 'productDescription', cls: 'cta-desc-', kind: 'desc' },
        { key: 'productImage', cls: 'cta-image-', kind: 'src' },
        { key: 'affiliateLink', cls: 'cta-link-', kind: 'href' },
        { key: 'ctaText', cls: 'cta-link-', kind: 'text' },
        { key: 'buttonColor', cls: 'cta-link-', kind: 'bg' },
        { key: 'backgroundColor', cls: 'cta-widget-', kind: 'bg' },
        { key: 'textColor', cls: 'cta-widget-', kind: 'color' },
        { key: 'originalPrice', cls: 'cta-original-', kind: 'price' },
        { key: 'discountedPrice', cls: 'cta-price-', kind: 'price' }
      ];
      function describe(record) {
        var lines = [];
        if (record.productDescription) lines.push(record.productDescription);
        var usps = record.customUsps || [];
        if (usps.length) {
          if (lines.length) lines.push('');
          for (var i = 0; i < usps.length; i++) lines.push('✓ ' + usps[i]);
        }
        return lines.join('<br>');
      }
      function applyUpdate(doc, id, record) {
        for (var i = 0; i < FIELDS.length; i++) {
          var f = FIELDS[i];
          if (!(f.key in record)) continue;
          var value = record[f.key];
          var els = doc.getElementsByClassName(f.cls + id);
          for (var j = 0; j < els.length; j++) {
            var el = els[j];
            if (f.kind === 'text') el.textContent = value;
            else if (f.kind === 'desc') el.innerHTML = describe(record);
            else if (f.kind === 'src') el.src = value;
            else if (f.kind === 'href') el.href = value;
            else if (f.kind === 'bg') el.style.backgroundColor = value;
            else if (f.kind === 'color') el.style.color = value;
            else if (f.kind === 'price') el.textContent = value ? value + ' kr.' : '';
          }
        }
      }"#
}

/// Records a click on the CTA anchor into the `widgetClicks` localStorage
/// map, keyed by widget id. Read-modify-write on every click; the record
/// shape matches what the configurator's stats view reads back.
pub fn click_tracker(config: &WidgetConfig) -> String {
    format!(
        r#"
    <script>
    (function() {{
      var links = document.getElementsByClassName('cta-link-{id}');
      for (var i = 0; i < links.length; i++) {{
        links[i].addEventListener('click', function() {{
          try {{
            var clicks = JSON.parse(localStorage.getItem('widgetClicks') || '{{}}');
            if (!clicks['{id}']) clicks['{id}'] = [];
            clicks['{id}'].push({{
              timestamp: new Date().toISOString(),
              referrer: document.referrer
            }});
            localStorage.setItem('widgetClicks', JSON.stringify(clicks));
          }} catch (e) {{
            /* storage unavailable */
          }}
        }});
      }}
    }})();
    </script>"#,
        id = config.id,
    )
}

/// Polls the `widgetHistory` record store and patches the live DOM when
/// this widget's `lastModified` moves past the value baked in at compile
/// time. Only meaningful when the embed shares an origin with the
/// configurator; elsewhere the poll finds nothing and does nothing.
pub fn auto_updater(config: &WidgetConfig, opts: &CompileOptions) -> String {
    format!(
        r#"
    <script>
    (function() {{
      var WIDGET_ID = '{id}';
      var baked = '{last_modified}';
      {runtime}
      function poll() {{
        try {{
          var history = JSON.parse(localStorage.getItem('widgetHistory') || '[]');
          for (var i = 0; i < history.length; i++) {{
            var rec = history[i];
            if (String(rec.id) !== WIDGET_ID) continue;
            if (rec.lastModified && rec.lastModified !== baked) {{
              baked = rec.lastModified;
              applyUpdate(document, WIDGET_ID, rec);
            }}
            return;
          }}
        }} catch (e) {{
          /* storage unavailable */
        }}
      }}
      poll();
      setInterval(poll, {interval_ms});
    }})();
    </script>"#,
        id = config.id,
        last_modified = config.last_modified.as_deref().unwrap_or(""),
        runtime = patch_runtime(),
        interval_ms = u64::from(opts.poll_interval_secs) * 1000,
    )
}

/// In-frame half of the iframe bridge: listens for update messages from
/// the embedding page and applies them with the shared patch table. Origin
/// cannot be checked — a `data:` document has an opaque origin and no
/// knowledge of its host — so the payload shape and id are validated
/// instead.
pub fn frame_update_listener(config: &WidgetConfig) -> String {
    format!(
        r#"
    <script>
    (function() {{
      var WIDGET_ID = '{id}';
      {runtime}
      window.addEventListener('message', function(event) {{
        var msg = event.data;
        if (!msg || msg.type !== '{msg_type}' || String(msg.id) !== WIDGET_ID) return;
        applyUpdate(document, WIDGET_ID, msg.record || {{}});
      }});
    }})();
    </script>"#,
        id = config.id,
        runtime = patch_runtime(),
        msg_type = UPDATE_MESSAGE_TYPE,
    )
}

/// Parent-page half of the iframe bridge, emitted next to the `<iframe>`
/// tag. The frame's document cannot read the host's localStorage, so the
/// parent polls the record store and posts changed records into the frame.
/// Target origin is `'*'` of necessity: a `data:` frame's origin is opaque
/// and unmatchable. The payload is a widget config, which is already
/// public in the markup.
pub fn parent_bridge(config: &WidgetConfig, opts: &CompileOptions) -> String {
    format!(
        r#"
<script>
(function() {{
  var WIDGET_ID = '{id}';
  var baked = '{last_modified}';
  function poll() {{
    var frame = document.getElementById('cta-frame-{id}');
    if (!frame || !frame.contentWindow) return;
    try {{
      var history = JSON.parse(localStorage.getItem('widgetHistory') || '[]');
      for (var i = 0; i < history.length; i++) {{
        var rec = history[i];
        if (String(rec.id) !== WIDGET_ID) continue;
        if (rec.lastModified && rec.lastModified !== baked) {{
          baked = rec.lastModified;
          frame.contentWindow.postMessage(
            {{ type: '{msg_type}', id: WIDGET_ID, record: rec }},
            '*'
          );
        }}
        return;
      }}
    }} catch (e) {{
      /* storage unavailable */
    }}
  }}
  setInterval(poll, {interval_ms});
}})();
</script>"#,
        id = config.id,
        last_modified = config.last_modified.as_deref().unwrap_or(""),
        msg_type = UPDATE_MESSAGE_TYPE,
        interval_ms = u64::from(opts.poll_interval_secs) * 1000,
    )
}
