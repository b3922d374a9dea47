//! Fixed dimensions, markers and stylesheet for the exported document.

/// Slide size in CSS pixels.
pub const SLIDE_WIDTH_PX: u32 = 960;
pub const SLIDE_HEIGHT_PX: u32 = 540;

/// Marker substituted with the configured accent colour in [`STYLESHEET`].
pub const ACCENT_MARKER: &str = "__ACCENT__";

/// Opening tag of every slide block. One per catalog entry.
pub const SLIDE_OPEN_TAG: &str = r#"<div class="slide">"#;

/// Inline stylesheet. Slide size matches `SLIDE_WIDTH_PX` x `SLIDE_HEIGHT_PX`.
pub const STYLESHEET: &str = r#"
    * {
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }

    body {
      font-family: Arial, sans-serif;
      background: #f3f4f6;
      padding: 20px;
    }

    .slide {
      width: 960px;
      height: 540px;
      background: white;
      margin: 0 auto 30px;
      position: relative;
      box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
      page-break-after: always;
      overflow: hidden;
    }

    .page-number {
      position: absolute;
      bottom: 16px;
      right: 24px;
      font-size: 14px;
      color: #9ca3af;
    }

    .layout-title {
      height: 100%;
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: center;
      text-align: center;
      padding: 48px;
    }

    .layout-title h1 {
      font-size: 36px;
      font-weight: bold;
      color: #1a1a1a;
      margin-bottom: 32px;
      max-width: 800px;
      line-height: 1.3;
    }

    .layout-title .divider {
      width: 96px;
      height: 4px;
      background: __ACCENT__;
      margin-bottom: 32px;
    }

    .layout-title .subtitle p {
      font-size: 18px;
      color: #4b5563;
      margin: 12px 0;
    }

    .layout-content {
      height: 100%;
    }

    .layout-content .content-header {
      border-bottom: 4px solid __ACCENT__;
      padding: 20px 48px;
    }

    .layout-content h2 {
      font-size: 32px;
      font-weight: bold;
      color: #1a1a1a;
    }

    .layout-content .content-body {
      padding: 32px 48px;
      display: flex;
      gap: 32px;
      height: calc(100% - 88px);
    }

    .layout-content .bullets {
      flex: 1;
      list-style: none;
      display: flex;
      flex-direction: column;
      justify-content: center;
    }

    .layout-content .bullets li {
      display: flex;
      align-items: flex-start;
      gap: 12px;
      margin: 16px 0;
      font-size: 18px;
      color: #374151;
      line-height: 1.6;
    }

    .layout-content .bullets .bullet {
      color: __ACCENT__;
      font-size: 24px;
      line-height: 1;
      flex-shrink: 0;
    }

    .image-panel {
      width: 256px;
      display: flex;
      flex-direction: column;
      justify-content: center;
    }

    .image-panel img {
      width: 100%;
      height: auto;
      border-radius: 8px;
      box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    }

    .image-panel .caption {
      font-size: 12px;
      color: #6b7280;
      text-align: center;
      margin-top: 8px;
      font-style: italic;
    }

    .image-panel .image-placeholder {
      background: #fef3c7;
      border: 2px solid #fbbf24;
      border-radius: 8px;
      padding: 16px;
      font-size: 11px;
      color: #92400e;
      text-align: center;
    }

    .image-panel .placeholder-url {
      margin-top: 8px;
      font-size: 10px;
      color: #78350f;
      word-break: break-all;
    }

    .image-panel .image-error {
      background: #fee2e2;
      border: 2px solid #ef4444;
      border-radius: 8px;
      padding: 16px;
      font-size: 11px;
      color: #991b1b;
      text-align: center;
    }

    @media print {
      body {
        background: white;
        padding: 0;
      }

      .slide {
        margin: 0;
        box-shadow: none;
      }

      .instructions {
        display: none;
      }
    }

    .instructions {
      width: 960px;
      margin: 0 auto 30px;
      padding: 20px;
      background: #eff6ff;
      border: 2px solid __ACCENT__;
      border-radius: 8px;
    }

    .instructions h3 {
      color: __ACCENT__;
      margin-bottom: 12px;
    }

    .instructions ol {
      margin-left: 20px;
    }

    .instructions li {
      margin: 8px 0;
      color: #1e40af;
    }
"#;

/// Header block explaining how to turn the document into a slideshow file.
pub const INSTRUCTIONS: &str = r#"  <div class="instructions">
    <h3>📋 Instructions to Create PowerPoint</h3>
    <ol>
      <li><strong>Print to PDF:</strong> Use your browser's print function (Ctrl+P / Cmd+P) and save as PDF</li>
      <li><strong>Import to PowerPoint:</strong> Open PowerPoint → Insert → Pictures → select the PDF or take screenshots of each slide</li>
      <li><strong>Alternative:</strong> Copy the content below and paste into PowerPoint slides manually</li>
    </ol>
  </div>
"#;
