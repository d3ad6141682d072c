/*!

# Quick start

Write the survey in a text file, for example `feedback.md`:

```text
# Feedback

## A few questions about the workshop

### Was the workshop useful?
□ Yes
□ Somewhat
□ No

$$$1-2 What should we improve first?
□ Pace
□ Material
□ Exercises

##### Other comments
```

Check how the survey is understood:

```bash
survey-import -i feedback.md --preview
```

```text
Feedback
A few questions about the workshop
3 questions

1. Was the workshop useful?
   multiple choice
   - Yes
   - Somewhat
   - No
2. What should we improve first?
   ranking (multiple select) (max 2)
   - Pace
   - Material
   - Exercises
3. Other comments
   free text
```

Then write the records to import:

```bash
survey-import -i feedback.md --client-id client-42 --out feedback.json
```

Use `--verbose` to see how each line of the document was read. The format of the
document and of the output is described in the [manual](crate::manual).

From Rust, the parser is a single function:

```
let survey = survey_markdown::parse("# Feedback\n### Was it useful?\n□ Yes\n□ No");
assert_eq!(survey.questions[0].options, vec!["Yes", "No"]);
```

*/
