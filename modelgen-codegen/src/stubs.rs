//! Built-in templates for the generated model sources.

/// Extension of the generated model files
pub const FILE_EXTENSION: &str = "php";

/// The class template. `primary_key` carries its own trailing spacing so
/// it collapses cleanly when the table uses the default key; `getters`
/// and `setters` are removed as blocks when accessor generation is off.
pub const MODEL_STUB: &str = r#"<?php

namespace {{ namespace }};

use {{ extends }};

class {{ class }} extends {{ extends_short }}
{
    protected $table = '{{ table }}';

    {{ primary_key }}protected $fillable = {{ fillable }};

    protected $guarded = {{ guarded }};

    public $timestamps = {{ timestamps }};

{{ getters }}{{ setters }}}
"#;

/// Accessor method template
pub const GETTER_STUB: &str = r#"    public function {{ function }}()
    {
        return $this->{{ attribute }};
    }

"#;

/// Mutator method template
pub const SETTER_STUB: &str = r#"    public function {{ function }}($value)
    {
        $this->attributes['{{ attribute }}'] = $value;

        return $this;
    }

"#;
