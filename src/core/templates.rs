//! Bodies of the generated files
//!
//! Templates use `{{ key }}` placeholders. Rendering is plain substitution:
//! no escaping, no control flow. Optional fragments are selected by the
//! caller and passed in as (possibly empty) values.

use crate::core::params::{Feature, ProvisioningParameters};
use std::collections::HashMap;

pub const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'
import path from 'path'

export default defineConfig({
  plugins: [react()],
  resolve: {
    alias: {
      '@': path.resolve(__dirname, './src'),
    },
  },
})
"#;

pub const JSCONFIG: &str = r#"{
  "compilerOptions": {
    "baseUrl": ".",
    "paths": {
      "@/*": [
        "src/*"
      ]
    }
  },
  "include": [
    "src/**/*"
  ]
}
"#;

pub const COMPONENTS_JSON: &str = r#"{
  "$schema": "https://ui.shadcn.com/schema.json",
  "style": "default",
  "rsc": false,
  "tsx": false,
  "tailwind": {
    "config": "tailwind.config.js",
    "css": "src/index.css",
    "baseColor": "slate",
    "cssVariables": true
  },
  "aliases": {
    "components": "@/components",
    "utils": "@/lib/utils"
  }
}
"#;

pub const INDEX_CSS: &str = r#"@tailwind base;
@tailwind components;
@tailwind utilities;
"#;

const COMPONENT: &str = r#"import React, { useState } from 'react';
import { Card, CardContent, CardFooter, CardHeader, CardTitle } from "@/components/ui/card";
import { Button } from "@/components/ui/button";
import { Input } from "@/components/ui/input";
{{ icon_import }}
const {{ component }} = () => {
  const [inputText, setInputText] = useState('');
  const [outputText, setOutputText] = useState('');

  const handleSubmit = (e) => {
    e.preventDefault();
    // Here you would typically send the input to an API and get a response
    setOutputText(`Response to: "${inputText}"`);
  };

  return (
    <Card className="w-full max-w-md mx-auto mt-6">
      <CardHeader>
        <CardTitle>LLM Model Interface</CardTitle>
      </CardHeader>
      <CardContent>
        <form onSubmit={handleSubmit}>
          <Input
            type="text"
            placeholder="Enter your prompt"
            value={inputText}
            onChange={(e) => setInputText(e.target.value)}
          />
        </form>
      </CardContent>
      <CardFooter className="flex justify-between">
        <Button onClick={handleSubmit}>
{{ icon_element }}          Submit
        </Button>
      </CardFooter>
      {outputText && (
        <CardContent>
          <p>{outputText}</p>
        </CardContent>
      )}
    </Card>
  );
};

export default {{ component }};
"#;

const APP_ENTRY: &str = r#"import './index.css'
import {{ component }} from './components/{{ component }}'

function App() {
  return (
    <div className="container mx-auto p-4">
      <h1 className="text-2xl font-bold mb-4">Welcome to {{ project }}</h1>
      <{{ component }}/>
    </div>
  )
}

export default App
"#;

const ICON_IMPORT: &str = "import { Send } from 'lucide-react';\n";
const ICON_ELEMENT: &str = "          <Send className='mr-2 h-4 w-4' />\n";

/// Substitute `{{ key }}` placeholders in a single pass
///
/// Unknown keys are left in place. Substituted values are never rescanned.
pub fn render(template: &str, vars: &HashMap<&str, &str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{ ") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 3..];

        match after_open.find(" }}") {
            Some(end) => {
                let key = &after_open[..end];
                match vars.get(key) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&rest[start..start + 3 + end + 3]),
                }
                rest = &after_open[end + 3..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Main UI component, with the icon fragments only when icons are enabled
pub fn component(params: &ProvisioningParameters) -> String {
    let icons = params.has(Feature::Icons);

    let vars = HashMap::from([
        ("component", params.component_name()),
        ("icon_import", if icons { ICON_IMPORT } else { "" }),
        ("icon_element", if icons { ICON_ELEMENT } else { "" }),
    ]);

    render(COMPONENT, &vars)
}

/// Application entry file importing the generated component
pub fn app_entry(params: &ProvisioningParameters) -> String {
    let vars = HashMap::from([
        ("component", params.component_name()),
        ("project", params.project_name()),
    ]);

    render(APP_ENTRY, &vars)
}
