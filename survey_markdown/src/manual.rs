/*!

This is the long-form manual for `survey_markdown` and `survey-import`.

## The survey dialect

A survey is written as a plain text document. Each line starts with a marker that
tells what the line is. Empty lines and surrounding whitespace are ignored, as well
as any line that does not start with one of the markers below.

| Marker      | Meaning                                                          |
|-------------|------------------------------------------------------------------|
| `# `        | Title of the survey                                              |
| `## `       | Description of the survey                                        |
| `### `      | Multiple choice question, one answer                             |
| `#### `     | Multiple choice question, several answers                        |
| `##### `    | Free text question (optional)                                    |
| `$$$`       | Ranking question, optionally followed by a range such as `1-3`  |
| `□ `        | Option of the question above                                     |

Example:

```text
# Product survey

## Tell us what you think about the new release

### How did you hear about us?
□ Search engine
□ A friend
□ Social media

#### Which features do you use? (several answers)
□ Export
□ Sharing
□ Reports

$$$1-3 Rank your favourite features (up to 3)
□ Speed
□ Design
□ Price

##### Anything else?
```

### Title and description

Only the first `# ` line and the first `## ` line are used. Later ones are skipped.
When the document has none, a default title and description are used. The defaults
can be changed with [`Builder`](crate::builder::Builder) or the `--title` and
`--description` flags of `survey-import`.

### Questions

Questions are numbered in order of appearance, starting at 0. Multiple choice and
ranking questions are required; free text questions are not.

A question collects the `□ ` lines that follow it, until the next question starts.
Option lines that appear before the first question are dropped. Title and
description lines do not end the current question.

### Ranking questions

The `$$$` marker may be directly followed by a range `N-M`, before the first space.
The number after the dash is the maximum number of options the respondent may rank.
When the range is missing or cannot be read, the maximum is 3. An explicit `0` is kept,
and numbers too large to store are capped:

* `$$$ Rank these` allows 3 selections
* `$$$1-5 Rank these` allows 5 selections
* `$$$1-x Rank these` allows 3 selections
* `$$$1-0 Rank these` allows 0 selections

## Import configuration

`survey-import` accepts a JSON configuration with the `--config` flag:

```json
{
  "source": { "filePath": "survey.md" },
  "defaults": { "title": "Untitled survey", "description": "Imported survey" },
  "pointsReward": 10,
  "clientId": "client-1",
  "outputPath": "survey.json"
}
```

All the fields except `source` are optional. Relative paths are read from the
directory that contains the configuration file. Command line flags override the
values of the configuration.

## Output

The output describes the records that are created in the survey backend: one
survey, in the `draft` state, and its questions.

```json
{
  "survey": {
    "id": "survey-00000001",
    "title": "Product survey",
    "description": "Tell us what you think about the new release",
    "points_reward": 10,
    "status": "draft"
  },
  "questions": [
    {
      "survey_id": "survey-00000001",
      "question_text": "How did you hear about us?",
      "question_type": "multiple_choice",
      "options": ["Search engine", "A friend", "Social media"],
      "required": true,
      "order_index": 0,
      "is_multiple_select": false,
      "max_selections": null
    }
  ]
}
```

*/
